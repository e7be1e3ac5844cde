//! Edit state module structure
//!
//! - `state.rs` - Struct definition, constructors, getters, pen
//! - `drawing.rs` - Pixel, line and cell-fill operations plus pointer handling
//! - `canvas_operations.rs` - Clear, resize, content queries
//! - `frame_operations.rs` - Frame management and playback for sprites
//! - `export.rs` - Assembly, binary and screen exports

mod canvas_operations;
mod drawing;
mod export;
mod frame_operations;
mod state;

pub use state::EditState;
