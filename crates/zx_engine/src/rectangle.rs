use crate::{CHAR_SIZE, Position};

/// An axis-aligned rectangle in character-cell coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl CellRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Smallest rectangle containing both (inclusive) corner cells.
    pub fn from_corners(a: Position, b: Position) -> Self {
        let min = a.min(b);
        let max = a.max(b);
        Self::new(min.x, min.y, max.x - min.x + 1, max.y - min.y + 1)
    }

    pub fn cell_count(&self) -> i32 {
        self.width * self.height
    }

    /// Extend to cover `cell`.
    pub fn union_cell(self, cell: Position) -> Self {
        let min = Position::new(self.x, self.y).min(cell);
        let max = Position::new(self.x + self.width - 1, self.y + self.height - 1).max(cell);
        Self::from_corners(min, max)
    }

    /// Cells in export order: left to right, then top to bottom.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.y..self.y + self.height).flat_map(move |y| (self.x..self.x + self.width).map(move |x| Position::new(x, y)))
    }

    pub fn pixel_width(&self) -> i32 {
        self.width * CHAR_SIZE
    }

    pub fn pixel_height(&self) -> i32 {
        self.height * CHAR_SIZE
    }
}

impl std::fmt::Display for CellRect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{} at ({}, {})", self.width, self.height, self.x, self.y)
    }
}
