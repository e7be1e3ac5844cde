//! Export codecs and the project document format.

mod asm;
mod binary;
mod bytes;
mod export_options;
pub mod project;

pub use asm::{SHIFT_COUNT, asm_label, export_asm};
pub use binary::{SCR_SIZE, export_binary, export_scr};
pub use bytes::{mask_byte, pack_row, pre_shift, shifted_bytes};
pub use export_options::{ExportOptions, MaskInterleaving};

use crate::{Canvas, CellRect, EngineError, Frame, LevelMap, MAX_UDG_CELLS, Result};

/// What is being exported. Each variant borrows the editor's current data.
#[derive(Clone, Copy, Debug)]
pub enum ExportSource<'a> {
    /// Cropped to the drawn area.
    Udg(&'a Canvas),
    Tile(&'a Canvas),
    Scene(&'a Canvas),
    Sprite { frames: &'a [Frame], fps: u32, looping: bool },
    Level(&'a LevelMap),
}

impl ExportSource<'_> {
    /// Reject blank projects and over-sized UDG selections.
    ///
    /// A UDG or sprite needs at least one ink pixel; tiles and scenes also
    /// count as non-blank when any attribute differs from the default.
    pub fn check_exportable(&self) -> Result<()> {
        let has_content = match self {
            ExportSource::Udg(canvas) => canvas.has_ink(),
            ExportSource::Tile(canvas) | ExportSource::Scene(canvas) => canvas.has_content(),
            ExportSource::Sprite { frames, .. } => frames.iter().any(|f| f.canvas().has_ink()),
            ExportSource::Level(level) => level.has_content(),
        };
        if !has_content {
            log::warn!("export rejected: project is blank");
            return Err(EngineError::BlankExport);
        }
        if let Some(rect) = self.export_rect() {
            if matches!(self, ExportSource::Udg(_)) && rect.cell_count() > MAX_UDG_CELLS {
                log::warn!("export rejected: drawn area {rect} exceeds {MAX_UDG_CELLS} characters");
                return Err(EngineError::ExportTooLarge {
                    cells: rect.cell_count(),
                    max: MAX_UDG_CELLS,
                });
            }
        }
        Ok(())
    }

    /// The cell rectangle that gets exported for single-canvas sources.
    pub fn export_rect(&self) -> Option<CellRect> {
        match self {
            ExportSource::Udg(canvas) => canvas.drawn_bounds(),
            ExportSource::Tile(canvas) | ExportSource::Scene(canvas) => Some(canvas.full_rect()),
            ExportSource::Sprite { .. } | ExportSource::Level(_) => None,
        }
    }
}
