//! Owned 2D storage for pixels and attributes.
//!
//! Storage is row-major. Out-of-bounds reads return `None` and out-of-bounds
//! writes are ignored; bounds policy for user input lives one level up, in
//! [`crate::Canvas`].

use crate::{Attribute, Position};

/// A rectangular, row-major grid of `T`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: i32,
    height: i32,
    cells: Vec<T>,
}

/// One bool per pixel, `true` = ink.
pub type PixelGrid = Grid<bool>;

/// One attribute per 8×8 character cell.
pub type AttributeGrid = Grid<Attribute>;

impl<T: Clone> Grid<T> {
    /// Create a grid filled with `fill`. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32, fill: T) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            cells: vec![fill; width as usize * height as usize],
        }
    }

    /// Build a grid from nested rows, copying only the overlap with
    /// `width × height` and filling everything else with `fill`.
    ///
    /// Longer rows / extra rows are truncated, shorter ones padded.
    pub fn from_rows(rows: &[Vec<T>], width: i32, height: i32, fill: T) -> Self {
        let mut grid = Self::new(width, height, fill);
        for (y, row) in rows.iter().take(grid.height as usize).enumerate() {
            for (x, value) in row.iter().take(grid.width as usize).enumerate() {
                grid.cells[y * grid.width as usize + x] = value.clone();
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.is_inside(x, y) {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&T> {
        let i = self.index(x, y)?;
        Some(&self.cells[i])
    }

    pub fn get_at(&self, pos: Position) -> Option<&T> {
        self.get(pos.x, pos.y)
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut T> {
        let i = self.index(x, y)?;
        Some(&mut self.cells[i])
    }

    /// Write a cell. Silently ignored when `(x, y)` is outside the grid.
    pub fn set(&mut self, x: i32, y: i32, value: T) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = value;
        }
    }

    pub fn fill(&mut self, value: T) {
        for cell in &mut self.cells {
            *cell = value.clone();
        }
    }

    /// A single row, empty when `y` is out of range.
    pub fn row(&self, y: i32) -> &[T] {
        if y < 0 || y >= self.height {
            return &[];
        }
        let start = (y * self.width) as usize;
        &self.cells[start..start + self.width as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        (0..self.height).map(move |y| self.row(y))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.rows().map(<[T]>::to_vec).collect()
    }

    /// Return a new grid of the requested size.
    ///
    /// The top-left aligned overlap of the old and new rectangles is copied
    /// verbatim; every newly exposed cell is `fill`.
    pub fn resize(&self, new_width: i32, new_height: i32, fill: T) -> Self {
        let mut result = Self::new(new_width, new_height, fill);
        let copy_width = self.width.min(result.width);
        let copy_height = self.height.min(result.height);
        for y in 0..copy_height {
            let src = (y * self.width) as usize;
            let dst = (y * result.width) as usize;
            result.cells[dst..dst + copy_width as usize].clone_from_slice(&self.cells[src..src + copy_width as usize]);
        }
        result
    }
}
