//! Level maps: a grid of tile indices plus the tile library they refer to.

use crate::{Canvas, CHAR_SIZE, DEFAULT_MAP_SIZE, DEFAULT_TILE_SIZE, EngineError, Grid, MAX_LEVEL_TILES, MAX_MAP_SIZE, Result, TILE_SIZES};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelMap {
    tile_size: i32,
    map: Grid<u8>,
    tiles: Vec<Canvas>,
}

impl Default for LevelMap {
    fn default() -> Self {
        let chars = DEFAULT_TILE_SIZE / CHAR_SIZE;
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            map: Grid::new(DEFAULT_MAP_SIZE.0, DEFAULT_MAP_SIZE.1, 0),
            tiles: vec![Canvas::new(chars, chars)],
        }
    }
}

impl LevelMap {
    /// An empty map of `width × height` tiles, all pointing at one blank tile.
    ///
    /// # Errors
    ///
    /// Fails for a tile size outside [`TILE_SIZES`] or a map extent outside
    /// `1..=MAX_MAP_SIZE`.
    pub fn new(tile_size: i32, width: i32, height: i32) -> Result<Self> {
        Self::check_tile_size(tile_size)?;
        Self::check_map_size(width, height)?;
        let chars = tile_size / CHAR_SIZE;
        Ok(Self {
            tile_size,
            map: Grid::new(width, height, 0),
            tiles: vec![Canvas::new(chars, chars)],
        })
    }

    /// Assemble a level from loaded parts.
    ///
    /// Tiles are cropped/padded to the tile size; map entries pointing past the
    /// library are reset to tile 0. An empty library gets one blank tile.
    pub fn from_parts(tile_size: i32, map: Grid<u8>, tiles: Vec<Canvas>) -> Result<Self> {
        Self::check_tile_size(tile_size)?;
        Self::check_map_size(map.width(), map.height())?;
        let chars = tile_size / CHAR_SIZE;
        let mut tiles: Vec<Canvas> = tiles
            .into_iter()
            .take(MAX_LEVEL_TILES)
            .map(|tile| {
                if tile.width_chars() == chars && tile.height_chars() == chars {
                    tile
                } else {
                    tile.resized(chars, chars)
                }
            })
            .collect();
        if tiles.is_empty() {
            tiles.push(Canvas::new(chars, chars));
        }
        let mut map = map;
        for y in 0..map.height() {
            for x in 0..map.width() {
                if map.get(x, y).is_some_and(|&i| i as usize >= tiles.len()) {
                    map.set(x, y, 0);
                }
            }
        }
        Ok(Self { tile_size, map, tiles })
    }

    /// Change the tile size. Every tile keeps its top-left overlap.
    pub fn set_tile_size(&mut self, tile_size: i32) -> Result<()> {
        Self::check_tile_size(tile_size)?;
        if tile_size == self.tile_size {
            return Ok(());
        }
        let chars = tile_size / CHAR_SIZE;
        for tile in &mut self.tiles {
            *tile = tile.resized(chars, chars);
        }
        self.tile_size = tile_size;
        Ok(())
    }

    fn check_tile_size(tile_size: i32) -> Result<()> {
        if TILE_SIZES.contains(&tile_size) {
            Ok(())
        } else {
            Err(EngineError::UnsupportedSize {
                kind: "tile".to_string(),
                size: tile_size.to_string(),
            })
        }
    }

    pub(crate) fn check_map_size(width: i32, height: i32) -> Result<()> {
        if (1..=MAX_MAP_SIZE).contains(&width) && (1..=MAX_MAP_SIZE).contains(&height) {
            Ok(())
        } else {
            Err(EngineError::UnsupportedSize {
                kind: "map".to_string(),
                size: format!("{width}x{height}"),
            })
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    /// Tile edge length in pixels
    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    /// Tile edge length in characters
    pub fn tile_chars(&self) -> i32 {
        self.tile_size / CHAR_SIZE
    }

    pub fn map(&self) -> &Grid<u8> {
        &self.map
    }

    pub fn width(&self) -> i32 {
        self.map.width()
    }

    pub fn height(&self) -> i32 {
        self.map.height()
    }

    pub fn tiles(&self) -> &[Canvas] {
        &self.tiles
    }

    pub fn tile(&self, index: usize) -> Option<&Canvas> {
        self.tiles.get(index)
    }

    pub fn tile_mut(&mut self, index: usize) -> Option<&mut Canvas> {
        self.tiles.get_mut(index)
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<u8> {
        self.map.get(x, y).copied()
    }

    /// Any tile with ink or colour, or any map cell not pointing at tile 0.
    pub fn has_content(&self) -> bool {
        self.tiles.iter().any(Canvas::has_content) || self.map.iter().any(|&i| i != 0)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Map editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Place `tile` at map cell `(x, y)`. Ignored out of bounds or for an
    /// unknown tile.
    pub fn set_cell(&mut self, x: i32, y: i32, tile: usize) {
        if tile < self.tiles.len() {
            self.map.set(x, y, tile as u8);
        }
    }

    pub fn fill_map(&mut self, tile: usize) {
        if tile < self.tiles.len() {
            self.map.fill(tile as u8);
        }
    }

    /// Resize the map, keeping the top-left overlap; new cells use tile 0.
    pub fn resize_map(&mut self, width: i32, height: i32) -> Result<()> {
        Self::check_map_size(width, height)?;
        self.map = self.map.resize(width, height, 0);
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tile library
    // ═══════════════════════════════════════════════════════════════════════

    /// Append a blank tile, returning its index. `None` when the library is full.
    pub fn add_tile(&mut self) -> Option<usize> {
        let chars = self.tile_chars();
        self.push_tile(Canvas::new(chars, chars))
    }

    /// Append a copy of tile `index`.
    pub fn duplicate_tile(&mut self, index: usize) -> Option<usize> {
        let tile = self.tiles.get(index)?.clone();
        self.push_tile(tile)
    }

    fn push_tile(&mut self, tile: Canvas) -> Option<usize> {
        if self.tiles.len() >= MAX_LEVEL_TILES {
            return None;
        }
        self.tiles.push(tile);
        Some(self.tiles.len() - 1)
    }

    /// Remove a tile. Map cells using it fall back to tile 0, higher indices
    /// shift down by one. The last remaining tile cannot be removed.
    pub fn remove_tile(&mut self, index: usize) -> bool {
        if self.tiles.len() <= 1 || index >= self.tiles.len() {
            return false;
        }
        self.tiles.remove(index);
        let removed = index as u8;
        for y in 0..self.map.height() {
            for x in 0..self.map.width() {
                if let Some(cell) = self.map.get_mut(x, y) {
                    if *cell == removed {
                        *cell = 0;
                    } else if *cell > removed {
                        *cell -= 1;
                    }
                }
            }
        }
        true
    }
}
