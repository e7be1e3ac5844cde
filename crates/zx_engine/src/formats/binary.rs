//! Raw binary exports: plain data blocks and Spectrum `.scr` screen dumps.

use super::{ExportSource, bytes};
use crate::{Canvas, CellRect, EngineError, Result, SCENE_HEIGHT_CHARS, SCENE_WIDTH_CHARS};

/// Size of a screen dump: 6144 bitmap bytes + 768 attribute bytes.
pub const SCR_SIZE: usize = 6912;

const BITMAP_SIZE: usize = 6144;

/// Pixel bytes followed by attribute bytes, in the same order as the
/// assembly export (no masks, no pre-shifts).
///
/// Levels are written as tile bitmaps, tile attributes, then the map.
pub fn export_binary(source: &ExportSource<'_>) -> Result<Vec<u8>> {
    source.check_exportable()?;
    let mut data = Vec::new();
    match source {
        ExportSource::Udg(canvas) | ExportSource::Tile(canvas) | ExportSource::Scene(canvas) => {
            let rect = source.export_rect().unwrap_or_else(|| canvas.full_rect());
            push_cells(&mut data, canvas, rect);
            push_attributes(&mut data, canvas, rect);
        }
        ExportSource::Sprite { frames, .. } => {
            for frame in frames.iter() {
                let canvas = frame.canvas();
                for y in 0..canvas.height() {
                    data.extend(bytes::pack_row(canvas.pixels().row(y)));
                }
            }
            for frame in frames.iter() {
                push_attributes(&mut data, frame.canvas(), frame.canvas().full_rect());
            }
        }
        ExportSource::Level(level) => {
            for tile in level.tiles() {
                push_cells(&mut data, tile, tile.full_rect());
            }
            for tile in level.tiles() {
                push_attributes(&mut data, tile, tile.full_rect());
            }
            data.extend(level.map().iter());
        }
    }
    Ok(data)
}

fn push_cells(data: &mut Vec<u8>, canvas: &Canvas, rect: CellRect) {
    for cell in rect.cells() {
        data.extend(canvas.cell_bytes(cell.x, cell.y));
    }
}

fn push_attributes(data: &mut Vec<u8>, canvas: &Canvas, rect: CellRect) {
    for cell in rect.cells() {
        data.push(canvas.cell_attribute(cell.x, cell.y).unwrap_or_default().to_byte());
    }
}

/// Offset of pixel row `y`, byte column `column` inside the display file.
///
/// The screen is split in three 64-line thirds; inside a third the lines are
/// interleaved by character row.
pub fn display_offset(y: i32, column: i32) -> usize {
    let y = y as usize;
    (((y & 0xC0) << 5) | ((y & 0x07) << 8) | ((y & 0x38) << 2)) + column as usize
}

/// Dump a full-screen canvas in display-file layout.
///
/// # Errors
///
/// Fails unless the canvas is exactly 32×24 characters.
pub fn export_scr(canvas: &Canvas) -> Result<Vec<u8>> {
    if canvas.width_chars() != SCENE_WIDTH_CHARS || canvas.height_chars() != SCENE_HEIGHT_CHARS {
        return Err(EngineError::invalid_size(format!(
            "screen dumps need {SCENE_WIDTH_CHARS}x{SCENE_HEIGHT_CHARS} characters, got {}x{}",
            canvas.width_chars(),
            canvas.height_chars()
        )));
    }
    let mut data = vec![0u8; SCR_SIZE];
    for y in 0..canvas.height() {
        for column in 0..SCENE_WIDTH_CHARS {
            data[display_offset(y, column)] = canvas.byte_at(column, y);
        }
    }
    for cy in 0..SCENE_HEIGHT_CHARS {
        for cx in 0..SCENE_WIDTH_CHARS {
            let offset = BITMAP_SIZE + (cy * SCENE_WIDTH_CHARS + cx) as usize;
            data[offset] = canvas.cell_attribute(cx, cy).unwrap_or_default().to_byte();
        }
    }
    Ok(data)
}
