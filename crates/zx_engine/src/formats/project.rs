//! Project documents (JSON).
//!
//! Every field is optional on input so that hand-edited or older files still
//! load: missing grids become blank, missing attribute fields take the
//! hardware default, colours are clamped into range and arrays are cropped or
//! padded to the declared size.

use serde::{Deserialize, Serialize};

use crate::{
    Attribute, AttributeGrid, CHAR_SIZE, Canvas, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE, EngineError, Grid, LevelMap, MAX_COLOR, PixelGrid, Profile,
    ProjectKind, Result, SizeConfig,
};

/// Version written by this implementation.
pub const PROJECT_VERSION: u32 = 1;

fn default_version() -> u32 {
    PROJECT_VERSION
}

/// One attribute cell as stored in a document.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ink: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paper: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bright: Option<bool>,
}

impl AttributeDocument {
    pub fn from_attribute(attr: Attribute) -> Self {
        Self {
            ink: Some(attr.ink() as i64),
            paper: Some(attr.paper() as i64),
            bright: Some(attr.bright()),
        }
    }

    /// Missing fields default to `ink 7, paper 0, bright`; colours are clamped to `0..=7`.
    pub fn to_attribute(&self) -> Attribute {
        let clamp = |v: i64| v.clamp(0, MAX_COLOR as i64) as u8;
        Attribute::new(
            self.ink.map_or(Attribute::DEFAULT.ink(), clamp),
            self.paper.map_or(Attribute::DEFAULT.paper(), clamp),
            self.bright.unwrap_or(Attribute::DEFAULT.bright()),
        )
    }
}

/// A frame of a software sprite, or a tile of a level library.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixels: Option<Vec<Vec<bool>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Vec<AttributeDocument>>>,
}

impl FrameDocument {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let (pixels, attributes) = encode_canvas(canvas);
        Self {
            pixels: Some(pixels),
            attributes: Some(attributes),
            ..Default::default()
        }
    }

    pub fn to_canvas(&self, size: &SizeConfig, fill: Attribute) -> Result<Canvas> {
        decode_canvas(self.pixels.as_deref(), self.attributes.as_deref(), size, fill)
    }
}

/// Saved pen selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PenDocument {
    #[serde(default)]
    pub ink: Option<i64>,
    #[serde(default)]
    pub bright: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    #[serde(default = "default_version")]
    pub version: u32,

    /// `tile`, `scene`, `level`, `software_sprite`; absent for UDG projects.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    // Size tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tile_size: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chars_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprite_height: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_width: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_height: Option<i32>,

    // Single canvas projects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixels: Option<Vec<Vec<bool>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<Vec<Vec<AttributeDocument>>>,

    // Software sprites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frames: Option<Vec<FrameDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_frame: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<u32>,
    #[serde(rename = "loop", default, skip_serializing_if = "Option::is_none")]
    pub looping: Option<bool>,

    // Levels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiles: Option<Vec<FrameDocument>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map: Option<Vec<Vec<i64>>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pen: Option<PenDocument>,
}

impl ProjectDocument {
    pub fn new(kind: ProjectKind) -> Self {
        Self {
            version: PROJECT_VERSION,
            kind: kind.type_tag().map(str::to_string),
            ..Default::default()
        }
    }

    /// Parse a document.
    ///
    /// # Errors
    ///
    /// Fails for malformed JSON or values of the wrong JSON type.
    pub fn from_json(text: &str) -> Result<Self> {
        let doc: ProjectDocument = serde_json::from_str(text)?;
        if doc.version > PROJECT_VERSION {
            log::warn!("project document version {} is newer than {}, loading anyway", doc.version, PROJECT_VERSION);
        }
        Ok(doc)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The project kind named by the type tag, `None` for unknown tags.
    pub fn project_kind(&self) -> Option<ProjectKind> {
        ProjectKind::from_type_tag(self.kind.as_deref())
    }

    /// Fail unless the document is tagged as `expected`.
    pub fn expect_kind(&self, expected: ProjectKind) -> Result<()> {
        if self.project_kind() == Some(expected) {
            return Ok(());
        }
        Err(EngineError::WrongProjectType {
            expected: expected.name().to_string(),
            found: self.kind.clone().unwrap_or_else(|| ProjectKind::Udg.name().to_string()),
        })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Size tags
    // ═══════════════════════════════════════════════════════════════════════

    /// Write the size tags for `profile`.
    pub fn set_size(&mut self, profile: Profile, size: &SizeConfig) {
        match profile {
            Profile::Udg | Profile::Scene => {
                self.chars_width = Some(size.width_chars);
                self.chars_height = Some(size.height_chars);
            }
            Profile::Tile => {
                self.tile_size = Some(size.width_pixels);
            }
            Profile::Sprite => {
                self.sprite_width = Some(size.width_pixels);
                self.sprite_height = Some(size.height_pixels);
            }
        }
    }

    /// Resolve and validate the declared size for `profile`.
    ///
    /// Missing tags fall back to the profile default.
    pub fn size_for(&self, profile: Profile) -> Result<SizeConfig> {
        let default = profile.default_size();
        let (width_chars, height_chars, label) = match profile {
            Profile::Udg | Profile::Scene => {
                let w = self.chars_width.unwrap_or(default.width_chars);
                let h = self.chars_height.unwrap_or(default.height_chars);
                (w, h, format!("{w}x{h} chars"))
            }
            Profile::Tile => {
                let size = self.tile_size.unwrap_or(default.width_pixels);
                if size % CHAR_SIZE != 0 {
                    return Err(unsupported(profile, size.to_string()));
                }
                (size / CHAR_SIZE, size / CHAR_SIZE, size.to_string())
            }
            Profile::Sprite => {
                let w = self.sprite_width.unwrap_or(default.width_pixels);
                let h = self.sprite_height.unwrap_or(default.height_pixels);
                if w % CHAR_SIZE != 0 || h % CHAR_SIZE != 0 {
                    return Err(unsupported(profile, format!("{w}x{h}")));
                }
                (w / CHAR_SIZE, h / CHAR_SIZE, format!("{w}x{h}"))
            }
        };
        if !profile.accepts(width_chars, height_chars) {
            return Err(unsupported(profile, label));
        }
        Ok(SizeConfig::from_chars(width_chars, height_chars))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Levels
    // ═══════════════════════════════════════════════════════════════════════

    pub fn from_level(level: &LevelMap) -> Self {
        let mut doc = Self::new(ProjectKind::Level);
        doc.tile_size = Some(level.tile_size());
        doc.map_width = Some(level.width());
        doc.map_height = Some(level.height());
        doc.tiles = Some(level.tiles().iter().map(FrameDocument::from_canvas).collect());
        doc.map = Some(level.map().rows().map(|row| row.iter().map(|&i| i as i64).collect()).collect());
        doc
    }

    /// Rebuild a level map. Tile indices are clamped into a byte; indices past
    /// the library fall back to tile 0.
    ///
    /// # Errors
    ///
    /// Fails for an unsupported tile size or a map extent outside
    /// `1..=MAX_MAP_SIZE`, before anything is allocated.
    pub fn to_level(&self) -> Result<LevelMap> {
        let tile_size = self.tile_size.unwrap_or(DEFAULT_TILE_SIZE);
        let width = self.map_width.unwrap_or(DEFAULT_MAP_SIZE.0);
        let height = self.map_height.unwrap_or(DEFAULT_MAP_SIZE.1);
        LevelMap::check_map_size(width, height)?;
        if !crate::TILE_SIZES.contains(&tile_size) {
            return Err(EngineError::UnsupportedSize {
                kind: ProjectKind::Level.name().to_string(),
                size: tile_size.to_string(),
            });
        }
        let chars = tile_size / CHAR_SIZE;
        let tile_size_config = SizeConfig::from_chars(chars, chars);
        let tiles = self
            .tiles
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|tile| tile.to_canvas(&tile_size_config, Attribute::DEFAULT))
            .collect::<Result<Vec<_>>>()?;
        let rows: Vec<Vec<u8>> = self
            .map
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|row| row.iter().map(|&i| i.clamp(0, 255) as u8).collect())
            .collect();
        let map = Grid::from_rows(&rows, width, height, 0u8);
        LevelMap::from_parts(tile_size, map, tiles)
    }
}

fn unsupported(profile: Profile, size: String) -> EngineError {
    EngineError::UnsupportedSize {
        kind: profile.kind().name().to_string(),
        size,
    }
}

/// Nested rows for a canvas.
pub fn encode_canvas(canvas: &Canvas) -> (Vec<Vec<bool>>, Vec<Vec<AttributeDocument>>) {
    let pixels = canvas.pixels().to_rows();
    let attributes = canvas
        .attributes()
        .rows()
        .map(|row| row.iter().map(|&a| AttributeDocument::from_attribute(a)).collect())
        .collect();
    (pixels, attributes)
}

/// Build a canvas of `size` from whatever rows a document carried.
///
/// Only the overlap is copied; missing pixels are paper and missing
/// attribute cells are `fill`.
pub fn decode_canvas(pixels: Option<&[Vec<bool>]>, attributes: Option<&[Vec<AttributeDocument>]>, size: &SizeConfig, fill: Attribute) -> Result<Canvas> {
    let pixels: PixelGrid = Grid::from_rows(pixels.unwrap_or_default(), size.width_pixels, size.height_pixels, false);
    let attribute_rows: Vec<Vec<Attribute>> = attributes
        .unwrap_or_default()
        .iter()
        .map(|row| row.iter().map(AttributeDocument::to_attribute).collect())
        .collect();
    let attributes: AttributeGrid = Grid::from_rows(&attribute_rows, size.width_chars, size.height_chars, fill);
    Canvas::from_grids(pixels, attributes)
}
