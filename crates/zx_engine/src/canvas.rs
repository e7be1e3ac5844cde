//! Pixel + attribute snapshot and the drawing rules that keep the two in sync.
//!
//! Every write that puts ink on a pixel also stamps the owning character
//! cell's ink colour, mirroring the one-colour-pair-per-cell limit of the
//! hardware. Erasing leaves the attribute alone, so a cell keeps the colour
//! of the last ink committed to it.

use std::collections::HashSet;

use crate::{Attribute, AttributeGrid, CHAR_SIZE, CellRect, EngineError, Grid, Pen, PixelGrid, Position, Result, raster};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Canvas {
    pixels: PixelGrid,
    attributes: AttributeGrid,
}

impl Canvas {
    /// A blank canvas of `width_chars × height_chars` with default attributes.
    pub fn new(width_chars: i32, height_chars: i32) -> Self {
        Self::with_attribute(width_chars, height_chars, Attribute::DEFAULT)
    }

    /// A blank canvas whose cells all start out as `attribute`.
    pub fn with_attribute(width_chars: i32, height_chars: i32, attribute: Attribute) -> Self {
        Self {
            pixels: Grid::new(width_chars * CHAR_SIZE, height_chars * CHAR_SIZE, false),
            attributes: Grid::new(width_chars, height_chars, attribute),
        }
    }

    /// Assemble a canvas from existing grids.
    ///
    /// # Errors
    ///
    /// Fails when the pixel grid is not character aligned or the attribute grid
    /// does not have exactly one entry per character cell.
    pub fn from_grids(pixels: PixelGrid, attributes: AttributeGrid) -> Result<Self> {
        if pixels.width() % CHAR_SIZE != 0 || pixels.height() % CHAR_SIZE != 0 {
            return Err(EngineError::invalid_size(format!(
                "{}x{} pixels is not a multiple of the character size",
                pixels.width(),
                pixels.height()
            )));
        }
        if attributes.width() * CHAR_SIZE != pixels.width() || attributes.height() * CHAR_SIZE != pixels.height() {
            return Err(EngineError::invalid_size(format!(
                "{}x{} attributes do not match {}x{} pixels",
                attributes.width(),
                attributes.height(),
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels, attributes })
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pixels(&self) -> &PixelGrid {
        &self.pixels
    }

    pub fn attributes(&self) -> &AttributeGrid {
        &self.attributes
    }

    /// Width in pixels
    pub fn width(&self) -> i32 {
        self.pixels.width()
    }

    /// Height in pixels
    pub fn height(&self) -> i32 {
        self.pixels.height()
    }

    pub fn width_chars(&self) -> i32 {
        self.attributes.width()
    }

    pub fn height_chars(&self) -> i32 {
        self.attributes.height()
    }

    pub fn is_inside(&self, x: i32, y: i32) -> bool {
        self.pixels.is_inside(x, y)
    }

    /// Pixel value, `false` outside the canvas.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.pixels.get(x, y).copied().unwrap_or(false)
    }

    /// Attribute of the character cell at `(cx, cy)`.
    pub fn cell_attribute(&self, cx: i32, cy: i32) -> Option<Attribute> {
        self.attributes.get(cx, cy).copied()
    }

    /// Attribute of the character cell containing pixel `(x, y)`.
    pub fn attribute_at(&self, x: i32, y: i32) -> Option<Attribute> {
        self.attributes.get_at(raster::cell_of(x, y)).copied()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Drawing
    // ═══════════════════════════════════════════════════════════════════════

    /// Set or erase a single pixel. Outside the canvas this does nothing.
    ///
    /// Only ink writes touch the cell attribute (ink + bright from `pen`,
    /// paper untouched).
    pub fn set_pixel(&mut self, x: i32, y: i32, is_ink: bool, pen: Pen) {
        if !self.is_inside(x, y) {
            return;
        }
        self.pixels.set(x, y, is_ink);
        if is_ink {
            self.stamp_ink(raster::cell_of(x, y), pen);
        }
    }

    /// Ink every point of the line from `from` to `to`.
    ///
    /// Each character cell the line passes through gets exactly one attribute
    /// write, no matter how many of its pixels are hit. Points outside the
    /// canvas are skipped.
    pub fn draw_line(&mut self, from: Position, to: Position, pen: Pen) {
        let mut touched = Vec::new();
        let mut seen = HashSet::new();
        for point in raster::line_points(from, to) {
            if !self.is_inside(point.x, point.y) {
                continue;
            }
            self.pixels.set(point.x, point.y, true);
            let cell = point.cell();
            if seen.insert(cell) {
                touched.push(cell);
            }
        }
        for cell in touched {
            self.stamp_ink(cell, pen);
        }
    }

    /// Paint the paper of the single character cell containing `(x, y)`.
    ///
    /// This is not a flood fill: exactly one cell changes, its paper becomes
    /// the pen's ink colour and its bright flag follows the pen.
    pub fn bucket_fill(&mut self, x: i32, y: i32, pen: Pen) {
        if !self.is_inside(x, y) {
            return;
        }
        let cell = raster::cell_of(x, y);
        if let Some(attr) = self.attributes.get_mut(cell.x, cell.y) {
            attr.set_paper(pen.ink());
            attr.set_bright(pen.bright());
        }
    }

    /// Overwrite a whole cell attribute. Out-of-range cells are ignored.
    pub fn set_cell_attribute(&mut self, cx: i32, cy: i32, attribute: Attribute) {
        self.attributes.set(cx, cy, attribute);
    }

    /// Erase every pixel and reset every cell to `attribute`.
    pub fn clear(&mut self, attribute: Attribute) {
        self.pixels.fill(false);
        self.attributes.fill(attribute);
    }

    fn stamp_ink(&mut self, cell: Position, pen: Pen) {
        if let Some(attr) = self.attributes.get_mut(cell.x, cell.y) {
            attr.set_ink(pen.ink());
            attr.set_bright(pen.bright());
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Size
    // ═══════════════════════════════════════════════════════════════════════

    /// Return a copy resized to `width_chars × height_chars`.
    ///
    /// The top-left overlap is preserved; new pixels are paper and new cells
    /// get the default attribute.
    pub fn resized(&self, width_chars: i32, height_chars: i32) -> Canvas {
        Canvas {
            pixels: self.pixels.resize(width_chars * CHAR_SIZE, height_chars * CHAR_SIZE, false),
            attributes: self.attributes.resize(width_chars, height_chars, Attribute::DEFAULT),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Content queries
    // ═══════════════════════════════════════════════════════════════════════

    /// True when any pixel of character cell `(cx, cy)` is ink.
    pub fn cell_has_ink(&self, cx: i32, cy: i32) -> bool {
        let x0 = cx * CHAR_SIZE;
        let y0 = cy * CHAR_SIZE;
        (y0..y0 + CHAR_SIZE).any(|y| (x0..x0 + CHAR_SIZE).any(|x| self.pixel(x, y)))
    }

    pub fn has_ink(&self) -> bool {
        self.pixels.iter().any(|&p| p)
    }

    pub fn has_custom_attributes(&self) -> bool {
        self.attributes.iter().any(|a| !a.is_default())
    }

    /// Anything that differs from a freshly created canvas.
    pub fn has_content(&self) -> bool {
        self.has_ink() || self.has_custom_attributes()
    }

    /// Smallest cell rectangle covering every cell with at least one ink pixel,
    /// `None` for a blank canvas.
    pub fn drawn_bounds(&self) -> Option<CellRect> {
        let mut bounds: Option<CellRect> = None;
        for cy in 0..self.height_chars() {
            for cx in 0..self.width_chars() {
                if self.cell_has_ink(cx, cy) {
                    let cell = Position::new(cx, cy);
                    bounds = Some(match bounds {
                        Some(rect) => rect.union_cell(cell),
                        None => CellRect::new(cx, cy, 1, 1),
                    });
                }
            }
        }
        bounds
    }

    /// The full extent in cells.
    pub fn full_rect(&self) -> CellRect {
        CellRect::new(0, 0, self.width_chars(), self.height_chars())
    }

    /// The eight pixel rows of cell `(cx, cy)` packed into bytes.
    pub fn cell_bytes(&self, cx: i32, cy: i32) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        for (row, byte) in bytes.iter_mut().enumerate() {
            *byte = self.byte_at(cx, cy * CHAR_SIZE + row as i32);
        }
        bytes
    }

    /// Packed byte for character column `cx` of pixel row `y`.
    ///
    /// Bit 7 is the leftmost pixel.
    pub fn byte_at(&self, cx: i32, y: i32) -> u8 {
        let x0 = cx * CHAR_SIZE;
        (0..CHAR_SIZE).fold(0u8, |acc, bit| if self.pixel(x0 + bit, y) { acc | (0x80 >> bit) } else { acc })
    }
}
