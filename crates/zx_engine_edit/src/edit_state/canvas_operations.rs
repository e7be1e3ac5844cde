//! Whole-canvas operations: clear, resize and the "is there work to lose?" query

use zx_engine::{EngineError, Result, SizeConfig};

use super::EditState;

impl EditState {
    /// Blank the current frame using the profile's clear colours
    pub fn clear_frame(&mut self) {
        if !self.can_edit() {
            return;
        }
        let attribute = self.profile.clear_attribute(self.pen);
        self.current_canvas_mut().clear(attribute);
        self.tool_state.reset_line();
    }

    /// Blank every frame
    pub fn clear_canvas(&mut self) {
        if !self.can_edit() {
            return;
        }
        let blank = self.blank_canvas();
        self.reel.map_canvases(|_| blank.clone());
        self.tool_state.reset_line();
    }

    /// Resize every frame to `cols × rows` characters, keeping the top-left
    /// overlap.
    ///
    /// # Errors
    ///
    /// Rejected with the state unchanged for a dimension below one, a size
    /// over the profile's cell budget, or a size the profile does not offer.
    /// Fails with [`EngineError::PlaybackActive`] while a sprite is playing.
    pub fn resize_canvas(&mut self, cols: i32, rows: i32) -> Result<()> {
        if !self.can_edit() {
            return Err(EngineError::PlaybackActive);
        }
        if let Err(err) = Self::check_size(self.profile, cols, rows) {
            if self.profile.legal_sizes().is_none() {
                self.warn(err.to_string());
            } else {
                log::debug!("resize rejected: {err}");
            }
            return Err(err);
        }
        if cols == self.size.width_chars && rows == self.size.height_chars {
            return Ok(());
        }
        self.reel.map_canvases(|canvas| canvas.resized(cols, rows));
        self.size = SizeConfig::from_chars(cols, rows);
        self.tool_state.reset_line();
        log::debug!("canvas resized to {}", self.size.label);
        Ok(())
    }

    /// Change the edge length of a tile project, in pixels
    pub fn set_tile_size(&mut self, tile_size: i32) -> Result<()> {
        let (cols, rows) = Self::pixels_to_chars(self.profile, tile_size, tile_size)?;
        self.resize_canvas(cols, rows)
    }

    /// Change a sprite's size, in pixels
    pub fn set_sprite_size(&mut self, width: i32, height: i32) -> Result<()> {
        let (cols, rows) = Self::pixels_to_chars(self.profile, width, height)?;
        self.resize_canvas(cols, rows)
    }

    /// True when any frame holds ink or a non-default attribute.
    ///
    /// The UI asks for confirmation before a clear or size change discards this.
    pub fn has_content(&self) -> bool {
        self.reel.frames().iter().any(|f| f.canvas().has_content())
    }
}
