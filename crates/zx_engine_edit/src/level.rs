//! Level editor: a tile map plus the library of tiles it is painted with.
//!
//! Tiles are drawn with the same rules as every other canvas. Map cells are
//! addressed in tile coordinates.

use zx_engine::formats::{self, ExportOptions, ExportSource, project::ProjectDocument};
use zx_engine::{Canvas, LevelMap, Pen, Position, ProjectKind, Result, raster};

use crate::tools::{Tool, ToolState};

pub struct LevelEditState {
    pub(crate) level: LevelMap,
    pub(crate) selected_tile: usize,
    pub(crate) pen: Pen,
    pub(crate) tool_state: ToolState,
    pub(crate) project_name: String,
}

impl Default for LevelEditState {
    fn default() -> Self {
        Self::from_level(LevelMap::default())
    }
}

impl LevelEditState {
    pub fn new(tile_size: i32, width: i32, height: i32) -> Result<Self> {
        Ok(Self::from_level(LevelMap::new(tile_size, width, height)?))
    }

    pub fn from_level(level: LevelMap) -> Self {
        Self {
            level,
            selected_tile: 0,
            pen: Pen::default(),
            tool_state: ToolState::default(),
            project_name: "untitled".to_string(),
        }
    }

    pub fn level(&self) -> &LevelMap {
        &self.level
    }

    pub fn selected_tile(&self) -> usize {
        self.selected_tile
    }

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn set_ink(&mut self, ink: u8) {
        self.pen.set_ink(ink);
    }

    pub fn set_bright(&mut self, bright: bool) {
        self.pen.set_bright(bright);
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool_state.select(tool);
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    pub fn has_content(&self) -> bool {
        self.level.has_content()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Map editing
    // ═══════════════════════════════════════════════════════════════════════

    /// Stamp the selected tile at map cell `(x, y)`
    pub fn place_tile(&mut self, x: i32, y: i32) {
        self.level.set_cell(x, y, self.selected_tile);
    }

    /// Reset map cell `(x, y)` to tile 0
    pub fn erase_cell(&mut self, x: i32, y: i32) {
        self.level.set_cell(x, y, 0);
    }

    /// Stamp the selected tile along a line of map cells
    pub fn draw_tile_line(&mut self, from: Position, to: Position) {
        for p in raster::line_points(from, to) {
            self.level.set_cell(p.x, p.y, self.selected_tile);
        }
    }

    pub fn fill_map(&mut self) {
        self.level.fill_map(self.selected_tile);
    }

    pub fn resize_map(&mut self, width: i32, height: i32) -> Result<()> {
        self.level.resize_map(width, height)?;
        log::debug!("level map resized to {width}x{height}");
        Ok(())
    }

    /// Change the tile size, resizing every tile in the library
    pub fn set_tile_size(&mut self, tile_size: i32) -> Result<()> {
        self.level.set_tile_size(tile_size)?;
        self.tool_state.reset_line();
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tile library
    // ═══════════════════════════════════════════════════════════════════════

    pub fn select_tile(&mut self, index: usize) {
        if index < self.level.tiles().len() && index != self.selected_tile {
            self.selected_tile = index;
            self.tool_state.reset_line();
        }
    }

    /// Add a blank tile and select it
    pub fn add_tile(&mut self) -> bool {
        self.level.add_tile().map(|i| self.select_tile(i)).is_some()
    }

    pub fn duplicate_tile(&mut self) -> bool {
        self.level.duplicate_tile(self.selected_tile).map(|i| self.select_tile(i)).is_some()
    }

    pub fn remove_tile(&mut self) -> bool {
        if !self.level.remove_tile(self.selected_tile) {
            return false;
        }
        self.selected_tile = self.selected_tile.min(self.level.tiles().len() - 1);
        self.tool_state.reset_line();
        true
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Tile drawing
    // ═══════════════════════════════════════════════════════════════════════

    pub fn tile(&self) -> Option<&Canvas> {
        self.level.tile(self.selected_tile)
    }

    pub fn set_tile_pixel(&mut self, x: i32, y: i32, is_ink: bool) {
        let pen = self.pen;
        if let Some(tile) = self.level.tile_mut(self.selected_tile) {
            tile.set_pixel(x, y, is_ink, pen);
        }
    }

    pub fn draw_tile_pixels_line(&mut self, from: Position, to: Position) {
        let pen = self.pen;
        if let Some(tile) = self.level.tile_mut(self.selected_tile) {
            tile.draw_line(from, to, pen);
        }
    }

    pub fn bucket_fill_tile(&mut self, x: i32, y: i32) {
        let pen = self.pen;
        if let Some(tile) = self.level.tile_mut(self.selected_tile) {
            tile.bucket_fill(x, y, pen);
        }
    }

    pub fn clear_tile(&mut self) {
        if let Some(tile) = self.level.tile_mut(self.selected_tile) {
            tile.clear(zx_engine::Attribute::DEFAULT);
        }
        self.tool_state.reset_line();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Export and persistence
    // ═══════════════════════════════════════════════════════════════════════

    pub fn export_asm(&self, options: &ExportOptions) -> Result<String> {
        formats::export_asm(&self.project_name, &ExportSource::Level(&self.level), options)
    }

    pub fn export_binary(&self) -> Result<Vec<u8>> {
        formats::export_binary(&ExportSource::Level(&self.level))
    }

    pub fn to_document(&self) -> ProjectDocument {
        let mut doc = ProjectDocument::from_level(&self.level);
        doc.name = Some(self.project_name.clone());
        doc
    }

    pub fn save_project(&self) -> Result<String> {
        self.to_document().to_json()
    }

    pub fn from_document(doc: &ProjectDocument) -> Result<Self> {
        doc.expect_kind(ProjectKind::Level)?;
        let mut state = Self::from_level(doc.to_level()?);
        if let Some(name) = doc.name.as_deref().filter(|n| !n.is_empty()) {
            state.project_name = name.to_string();
        }
        Ok(state)
    }

    /// Replace the level with a parsed project; unchanged on error
    pub fn load_project(&mut self, text: &str) -> Result<()> {
        let doc = ProjectDocument::from_json(text)?;
        let loaded = Self::from_document(&doc)?;
        log::info!(
            "loaded level '{}' ({}x{} map, {} tiles)",
            loaded.project_name,
            loaded.level.width(),
            loaded.level.height(),
            loaded.level.tiles().len()
        );
        *self = loaded;
        Ok(())
    }
}
