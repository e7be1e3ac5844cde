//! Multi-frame animation state for software sprites.

mod playback;
mod reel;

pub use reel::{AnimationReel, DEFAULT_FPS};
