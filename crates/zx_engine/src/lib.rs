#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::cast_sign_loss,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::too_many_lines,
    clippy::cast_lossless,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::missing_errors_doc
)]
//! Data model and codecs for ZX Spectrum graphics: pixel/attribute grids,
//! raster algorithms, animation frames, level maps, the assembly/binary
//! exporters and the project document format.

mod attribute;
pub use attribute::*;

mod canvas;
pub use canvas::*;

mod error;
pub use error::*;

mod frame;
pub use frame::*;

mod grid;
pub use grid::*;

mod level;
pub use level::*;

mod position;
pub use position::*;

mod profile;
pub use profile::*;

pub mod raster;
pub use raster::CHAR_SIZE;

mod rectangle;
pub use rectangle::*;

pub mod formats;
pub use formats::{ExportOptions, ExportSource, MaskInterleaving};
