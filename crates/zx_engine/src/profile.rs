//! Editor profiles and their size rules.
//!
//! All drawing profiles share the same mutation rules; they only differ in
//! which sizes are legal, how large the canvas may get and what a cleared
//! cell looks like.

use crate::{Attribute, CHAR_SIZE, Pen};

/// Maximum number of character cells in a UDG project (and in a UDG export).
pub const MAX_UDG_CELLS: i32 = 21;

/// Legal tile edge lengths in pixels.
pub const TILE_SIZES: [i32; 4] = [8, 16, 24, 32];

pub const DEFAULT_TILE_SIZE: i32 = 16;

/// Scene extent in characters: one full Spectrum screen.
pub const SCENE_WIDTH_CHARS: i32 = 32;
pub const SCENE_HEIGHT_CHARS: i32 = 24;

/// Legal software sprite sizes in pixels (width, height).
pub const SPRITE_SIZES: [(i32, i32); 8] = [(8, 8), (16, 8), (8, 16), (16, 16), (24, 16), (16, 24), (24, 24), (32, 32)];

pub const DEFAULT_SPRITE_SIZE: (i32, i32) = (16, 16);

/// Maximum number of frames in a software sprite.
pub const MAX_FRAMES: usize = 32;

/// Level maps: extent in tiles per axis.
pub const MAX_MAP_SIZE: i32 = 64;
pub const DEFAULT_MAP_SIZE: (i32, i32) = (16, 12);

/// Level maps: maximum number of tiles in the library (indices fit a byte).
pub const MAX_LEVEL_TILES: usize = 256;

/// Resolved dimensions of a canvas.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SizeConfig {
    pub width_chars: i32,
    pub height_chars: i32,
    pub width_pixels: i32,
    pub height_pixels: i32,
    pub total_chars: i32,
    pub label: String,
}

impl SizeConfig {
    /// Values saturate at `i32::MAX`; callers validate with [`Profile::accepts`] first.
    pub fn from_chars(width_chars: i32, height_chars: i32) -> Self {
        let width_pixels = width_chars.saturating_mul(CHAR_SIZE);
        let height_pixels = height_chars.saturating_mul(CHAR_SIZE);
        Self {
            width_chars,
            height_chars,
            width_pixels,
            height_pixels,
            total_chars: width_chars.saturating_mul(height_chars),
            label: format!("{width_pixels}x{height_pixels} ({width_chars}x{height_chars} chars)"),
        }
    }
}

/// What kind of project a document holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProjectKind {
    Udg,
    Tile,
    Scene,
    Level,
    SoftwareSprite,
}

impl ProjectKind {
    /// The `type` field written into project documents. UDG projects are untagged.
    pub fn type_tag(self) -> Option<&'static str> {
        match self {
            ProjectKind::Udg => None,
            ProjectKind::Tile => Some("tile"),
            ProjectKind::Scene => Some("scene"),
            ProjectKind::Level => Some("level"),
            ProjectKind::SoftwareSprite => Some("software_sprite"),
        }
    }

    pub fn from_type_tag(tag: Option<&str>) -> Option<Self> {
        match tag {
            None => Some(ProjectKind::Udg),
            Some("tile") => Some(ProjectKind::Tile),
            Some("scene") => Some(ProjectKind::Scene),
            Some("level") => Some(ProjectKind::Level),
            Some("software_sprite") => Some(ProjectKind::SoftwareSprite),
            Some(_) => None,
        }
    }

    /// Suffix appended to the project name when saving.
    pub fn file_suffix(self) -> &'static str {
        match self {
            ProjectKind::Udg => "",
            ProjectKind::Tile => "_tile",
            ProjectKind::Scene => "_scene",
            ProjectKind::Level => "_level",
            ProjectKind::SoftwareSprite => "_sprite",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProjectKind::Udg => "UDG",
            ProjectKind::Tile => "tile",
            ProjectKind::Scene => "scene",
            ProjectKind::Level => "level",
            ProjectKind::SoftwareSprite => "software sprite",
        }
    }
}

impl std::fmt::Display for ProjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Drawing-engine profile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Profile {
    /// Variable size user defined graphics, at most [`MAX_UDG_CELLS`] cells.
    #[default]
    Udg,
    /// Square tile, one of [`TILE_SIZES`].
    Tile,
    /// Full 32×24 character screen.
    Scene,
    /// Multi-frame software sprite, one of [`SPRITE_SIZES`].
    Sprite,
}

impl Profile {
    pub fn kind(self) -> ProjectKind {
        match self {
            Profile::Udg => ProjectKind::Udg,
            Profile::Tile => ProjectKind::Tile,
            Profile::Scene => ProjectKind::Scene,
            Profile::Sprite => ProjectKind::SoftwareSprite,
        }
    }

    pub fn is_animated(self) -> bool {
        self == Profile::Sprite
    }

    /// Upper bound for `width_chars * height_chars`.
    pub fn max_cells(self) -> i32 {
        match self {
            Profile::Udg => MAX_UDG_CELLS,
            Profile::Tile => (TILE_SIZES[TILE_SIZES.len() - 1] / CHAR_SIZE).pow(2),
            Profile::Scene => SCENE_WIDTH_CHARS * SCENE_HEIGHT_CHARS,
            Profile::Sprite => SPRITE_SIZES.iter().map(|(w, h)| (w / CHAR_SIZE) * (h / CHAR_SIZE)).max().unwrap_or(1),
        }
    }

    pub fn default_size(self) -> SizeConfig {
        match self {
            Profile::Udg => SizeConfig::from_chars(1, 1),
            Profile::Tile => SizeConfig::from_chars(DEFAULT_TILE_SIZE / CHAR_SIZE, DEFAULT_TILE_SIZE / CHAR_SIZE),
            Profile::Scene => SizeConfig::from_chars(SCENE_WIDTH_CHARS, SCENE_HEIGHT_CHARS),
            Profile::Sprite => SizeConfig::from_chars(DEFAULT_SPRITE_SIZE.0 / CHAR_SIZE, DEFAULT_SPRITE_SIZE.1 / CHAR_SIZE),
        }
    }

    /// Every size the profile offers, `None` for the freely sized UDG profile.
    pub fn legal_sizes(self) -> Option<Vec<SizeConfig>> {
        match self {
            Profile::Udg => None,
            Profile::Tile => Some(TILE_SIZES.iter().map(|s| SizeConfig::from_chars(s / CHAR_SIZE, s / CHAR_SIZE)).collect()),
            Profile::Scene => Some(vec![SizeConfig::from_chars(SCENE_WIDTH_CHARS, SCENE_HEIGHT_CHARS)]),
            Profile::Sprite => Some(SPRITE_SIZES.iter().map(|(w, h)| SizeConfig::from_chars(w / CHAR_SIZE, h / CHAR_SIZE)).collect()),
        }
    }

    /// Whether `width_chars × height_chars` is a size this profile can hold.
    pub fn accepts(self, width_chars: i32, height_chars: i32) -> bool {
        if width_chars < 1 || height_chars < 1 {
            return false;
        }
        match width_chars.checked_mul(height_chars) {
            Some(cells) if cells <= self.max_cells() => {}
            _ => return false,
        }
        match self.legal_sizes() {
            None => true,
            Some(sizes) => sizes.iter().any(|s| s.width_chars == width_chars && s.height_chars == height_chars),
        }
    }

    /// Attribute a cleared cell gets.
    ///
    /// Sprites clear to the current pen so new frames are immediately
    /// coloured; everything else returns to the hardware default.
    pub fn clear_attribute(self, pen: Pen) -> Attribute {
        match self {
            Profile::Sprite => pen.blank_attribute(),
            _ => Attribute::DEFAULT,
        }
    }
}
