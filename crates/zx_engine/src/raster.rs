//! Integer raster algorithms.
//!
//! - Lines (Bresenham's algorithm)
//! - Pixel to character-cell translation

use crate::Position;

/// Width and height of a character cell in pixels.
pub const CHAR_SIZE: i32 = 8;

// ═══════════════════════════════════════════════════════════════════════════
// Bresenham Line Algorithm
// ═══════════════════════════════════════════════════════════════════════════

/// Bresenham's line algorithm - returns points along the line
///
/// The result is 8-connected, starts with `from`, ends with `to` and never
/// contains the same point twice.
pub fn line_points(from: Position, to: Position) -> Vec<Position> {
    let dx = (to.x - from.x).abs();
    let dy = -(to.y - from.y).abs();
    let sx = if from.x < to.x { 1 } else { -1 };
    let sy = if from.y < to.y { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity((dx.max(-dy) + 1) as usize);
    let mut x = from.x;
    let mut y = from.y;

    loop {
        points.push(Position::new(x, y));

        if x == to.x && y == to.y {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }

    points
}

// ═══════════════════════════════════════════════════════════════════════════
// Cell Addressing
// ═══════════════════════════════════════════════════════════════════════════

/// Character cell containing pixel `(x, y)`: `(floor(x / 8), floor(y / 8))`.
pub fn cell_of(x: i32, y: i32) -> Position {
    Position::new(x, y).cell()
}
