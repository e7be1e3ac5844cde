#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions
)]
//! Editor state for ZX Spectrum graphics: tools, pointer gestures, frames and
//! playback, plus project save/load on top of `zx_engine`.

pub mod animation;
pub use animation::{AnimationReel, DEFAULT_FPS};

mod edit_state;
pub use edit_state::EditState;

mod level;
pub use level::LevelEditState;

mod project;
pub use project::{project_file_name, project_name_from_file};

mod tools;
pub use tools::{LinePhase, Tool, ToolState};

pub use zx_engine::{EngineError, Result};
