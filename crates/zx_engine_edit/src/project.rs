//! Save and load of editor projects.
//!
//! Loads are all-or-nothing: a complete new [`EditState`] is built from the
//! document first and only swapped in once nothing can fail any more.

use std::path::Path;

use zx_engine::formats::project::{FrameDocument, PenDocument, ProjectDocument, decode_canvas, encode_canvas};
use zx_engine::{Attribute, EngineError, Frame, MAX_COLOR, MAX_FRAMES, Pen, Profile, ProjectKind, Result};

use crate::animation::AnimationReel;
use crate::edit_state::EditState;

const PROJECT_EXTENSION: &str = "json";

impl EditState {
    /// Snapshot the editor into a document
    pub fn to_document(&self) -> ProjectDocument {
        let mut doc = ProjectDocument::new(self.profile.kind());
        doc.name = Some(self.project_name.clone());
        doc.set_size(self.profile, &self.size);
        doc.pen = Some(PenDocument {
            ink: Some(self.pen.ink() as i64),
            bright: Some(self.pen.bright()),
        });

        if self.profile.is_animated() {
            let frames = self
                .reel
                .frames()
                .iter()
                .map(|frame| FrameDocument {
                    id: Some(frame.id().to_string()),
                    name: Some(frame.name().to_string()),
                    duration: Some(frame.duration_ms()),
                    ..FrameDocument::from_canvas(frame.canvas())
                })
                .collect();
            doc.frames = Some(frames);
            doc.current_frame = Some(self.reel.current_frame_index());
            doc.fps = Some(self.reel.fps());
            doc.looping = Some(self.reel.is_looping());
        } else {
            let (pixels, attributes) = encode_canvas(self.canvas());
            doc.pixels = Some(pixels);
            doc.attributes = Some(attributes);
        }
        doc
    }

    /// Serialize the project as pretty-printed JSON
    pub fn save_project(&self) -> Result<String> {
        self.to_document().to_json()
    }

    /// Build a fresh editor for `profile` from a document.
    ///
    /// # Errors
    ///
    /// Fails when the type tag does not belong to `profile` or the declared
    /// size is not legal for it.
    pub fn from_document(profile: Profile, doc: &ProjectDocument) -> Result<Self> {
        doc.expect_kind(profile.kind())?;
        let size = doc.size_for(profile)?;
        let pen = doc.pen.map(pen_from_document).unwrap_or_default();

        let mut state = Self::from_parts(profile, size.clone(), pen);
        if let Some(name) = doc.name.as_deref().filter(|n| !n.is_empty()) {
            state.project_name = name.to_string();
        }

        if profile.is_animated() {
            let mut frames = Vec::new();
            match doc.frames.as_deref() {
                Some(docs) if !docs.is_empty() => {
                    for (i, frame_doc) in docs.iter().take(MAX_FRAMES).enumerate() {
                        let canvas = frame_doc.to_canvas(&size, Attribute::DEFAULT)?;
                        let name = frame_doc.name.clone().unwrap_or_else(|| format!("Frame {}", i + 1));
                        let mut frame = Frame::new(frame_doc.id.clone().unwrap_or_default(), name, canvas);
                        if let Some(duration) = frame_doc.duration {
                            frame = frame.with_duration(duration.max(1));
                        }
                        frames.push(frame);
                    }
                }
                _ => {
                    let canvas = decode_canvas(doc.pixels.as_deref(), doc.attributes.as_deref(), &size, Attribute::DEFAULT)?;
                    frames.push(Frame::new(String::new(), "Frame 1", canvas));
                }
            }
            state.reel = AnimationReel::from_frames(
                frames,
                doc.current_frame.unwrap_or(0),
                doc.fps.unwrap_or(crate::animation::DEFAULT_FPS),
                doc.looping.unwrap_or(true),
            )?;
        } else {
            let canvas = decode_canvas(doc.pixels.as_deref(), doc.attributes.as_deref(), &size, Attribute::DEFAULT)?;
            state.reel.current_frame_mut().set_canvas(canvas);
        }
        Ok(state)
    }

    /// Replace this editor's contents with a parsed project.
    ///
    /// On any error the editor is left exactly as it was. Tool, line and
    /// playback state always start fresh.
    pub fn load_project(&mut self, text: &str) -> Result<()> {
        let doc = ProjectDocument::from_json(text)?;
        let loaded = Self::from_document(self.profile, &doc)?;
        log::info!(
            "loaded {} project '{}' ({}, {} frame(s))",
            self.profile.kind(),
            loaded.project_name,
            loaded.size.label,
            loaded.reel.len()
        );
        *self = loaded;
        Ok(())
    }

    /// Load a project file; the project name falls back to the file name.
    pub fn load_project_file(&mut self, path: &Path) -> Result<()> {
        let text = std::fs::read_to_string(path).map_err(|e| EngineError::read_file(path, e.to_string()))?;
        let mut doc = ProjectDocument::from_json(&text)?;
        if doc.name.as_deref().is_none_or(str::is_empty) {
            let file_name = path.file_name().map(|f| f.to_string_lossy().to_string()).unwrap_or_default();
            doc.name = Some(project_name_from_file(&file_name, self.profile.kind()));
        }
        *self = Self::from_document(self.profile, &doc)?;
        log::info!("loaded {}", path.display());
        Ok(())
    }
}

fn pen_from_document(doc: PenDocument) -> Pen {
    let default = Pen::default();
    Pen::new(
        doc.ink.map_or(default.ink(), |ink| ink.clamp(0, MAX_COLOR as i64) as u8),
        doc.bright.unwrap_or(default.bright()),
    )
}

/// File name a project is saved under: `<name><suffix>.json`
pub fn project_file_name(name: &str, kind: ProjectKind) -> String {
    format!("{name}{}.{PROJECT_EXTENSION}", kind.file_suffix())
}

/// Recover the project name from a file name by dropping the extension and
/// at most one trailing profile suffix.
pub fn project_name_from_file(file_name: &str, kind: ProjectKind) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map_or_else(|| file_name.to_string(), |s| s.to_string_lossy().to_string());
    let suffix = kind.file_suffix();
    if !suffix.is_empty() {
        if let Some(name) = stem.strip_suffix(suffix) {
            return name.to_string();
        }
    }
    stem
}
