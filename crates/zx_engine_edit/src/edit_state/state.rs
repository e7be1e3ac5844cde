//! Edit State
//!
//! One drawing engine for every profile. The profile decides which sizes are
//! legal and what a cleared cell looks like; the mutation rules are the same
//! everywhere. Single-canvas profiles are a reel with exactly one frame, so all
//! operations work on "the current frame".
//!
//! While a sprite is playing every pixel/attribute mutator is a no-op.

use zx_engine::{Attribute, AttributeGrid, CHAR_SIZE, Canvas, CellRect, EngineError, Frame, Pen, PixelGrid, Profile, Result, SizeConfig};

use crate::animation::AnimationReel;
use crate::tools::{Tool, ToolState};

/// Main state container for one editor instance
pub struct EditState {
    pub(crate) profile: Profile,
    pub(crate) size: SizeConfig,
    pub(crate) reel: AnimationReel,
    pub(crate) pen: Pen,
    pub(crate) tool_state: ToolState,
    pub(crate) project_name: String,

    /// Last rejection the UI should show to the user
    pub(crate) last_warning: Option<String>,
}

impl Default for EditState {
    fn default() -> Self {
        Self::new(Profile::default())
    }
}

impl EditState {
    // ═══════════════════════════════════════════════════════════════════════
    // Constructors
    // ═══════════════════════════════════════════════════════════════════════

    /// Create an editor with the profile's default size
    pub fn new(profile: Profile) -> Self {
        Self::from_parts(profile, profile.default_size(), Pen::default())
    }

    /// Create an editor with a canvas of `width_chars × height_chars`
    pub fn with_size(profile: Profile, width_chars: i32, height_chars: i32) -> Result<Self> {
        Self::check_size(profile, width_chars, height_chars)?;
        Ok(Self::from_parts(profile, SizeConfig::from_chars(width_chars, height_chars), Pen::default()))
    }

    /// Tile editor, `tile_size` is the edge length in pixels
    pub fn new_tile(tile_size: i32) -> Result<Self> {
        let (cols, rows) = Self::pixels_to_chars(Profile::Tile, tile_size, tile_size)?;
        Self::with_size(Profile::Tile, cols, rows)
    }

    /// Software sprite editor, size in pixels
    pub fn new_sprite(width: i32, height: i32) -> Result<Self> {
        let (cols, rows) = Self::pixels_to_chars(Profile::Sprite, width, height)?;
        Self::with_size(Profile::Sprite, cols, rows)
    }

    pub(crate) fn from_parts(profile: Profile, size: SizeConfig, pen: Pen) -> Self {
        let canvas = Canvas::with_attribute(size.width_chars, size.height_chars, profile.clear_attribute(pen));
        Self {
            profile,
            size,
            reel: AnimationReel::new(canvas),
            pen,
            tool_state: ToolState::default(),
            project_name: "untitled".to_string(),
            last_warning: None,
        }
    }

    /// Pixel sizes must be whole characters
    pub(crate) fn pixels_to_chars(profile: Profile, width: i32, height: i32) -> Result<(i32, i32)> {
        if width % CHAR_SIZE != 0 || height % CHAR_SIZE != 0 {
            return Err(EngineError::UnsupportedSize {
                kind: profile.kind().name().to_string(),
                size: format!("{width}x{height} pixels"),
            });
        }
        Ok((width / CHAR_SIZE, height / CHAR_SIZE))
    }

    pub(crate) fn check_size(profile: Profile, width_chars: i32, height_chars: i32) -> Result<()> {
        if width_chars < 1 || height_chars < 1 {
            return Err(EngineError::invalid_size(format!("{width_chars}x{height_chars} characters")));
        }
        if width_chars.checked_mul(height_chars).is_none_or(|cells| cells > profile.max_cells()) {
            return Err(EngineError::CellBudgetExceeded {
                width: width_chars,
                height: height_chars,
                max: profile.max_cells(),
            });
        }
        if !profile.accepts(width_chars, height_chars) {
            return Err(EngineError::UnsupportedSize {
                kind: profile.kind().name().to_string(),
                size: format!("{width_chars}x{height_chars} characters"),
            });
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn profile(&self) -> Profile {
        self.profile
    }

    pub fn size(&self) -> &SizeConfig {
        &self.size
    }

    pub fn width_chars(&self) -> i32 {
        self.size.width_chars
    }

    pub fn height_chars(&self) -> i32 {
        self.size.height_chars
    }

    /// Canvas of the current frame
    pub fn canvas(&self) -> &Canvas {
        self.reel.current_frame().canvas()
    }

    pub fn pixels(&self) -> &PixelGrid {
        self.canvas().pixels()
    }

    pub fn attributes(&self) -> &AttributeGrid {
        self.canvas().attributes()
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.canvas().pixel(x, y)
    }

    pub fn cell_attribute(&self, cx: i32, cy: i32) -> Option<Attribute> {
        self.canvas().cell_attribute(cx, cy)
    }

    pub fn reel(&self) -> &AnimationReel {
        &self.reel
    }

    pub fn frames(&self) -> &[Frame] {
        self.reel.frames()
    }

    pub fn current_frame_index(&self) -> usize {
        self.reel.current_frame_index()
    }

    pub fn is_playing(&self) -> bool {
        self.reel.is_playing()
    }

    pub fn tool(&self) -> Tool {
        self.tool_state.tool()
    }

    pub fn tool_state(&self) -> &ToolState {
        &self.tool_state
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn set_project_name(&mut self, name: impl Into<String>) {
        self.project_name = name.into();
    }

    /// Smallest character rectangle containing ink on the current frame
    pub fn drawn_bounds(&self) -> Option<CellRect> {
        self.canvas().drawn_bounds()
    }

    /// The most recent user-facing warning, if any
    pub fn last_warning(&self) -> Option<&str> {
        self.last_warning.as_deref()
    }

    pub fn take_warning(&mut self) -> Option<String> {
        self.last_warning.take()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pen
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pen(&self) -> Pen {
        self.pen
    }

    pub fn ink(&self) -> u8 {
        self.pen.ink()
    }

    pub fn bright(&self) -> bool {
        self.pen.bright()
    }

    /// Select the ink colour (clamped to `0..=7`)
    pub fn set_ink(&mut self, ink: u8) {
        self.pen.set_ink(ink);
    }

    pub fn set_bright(&mut self, bright: bool) {
        self.pen.set_bright(bright);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Internal helpers
    // ═══════════════════════════════════════════════════════════════════════

    /// Pixel and attribute mutators are disabled during playback.
    pub(crate) fn can_edit(&self) -> bool {
        !self.reel.is_playing()
    }

    pub(crate) fn current_canvas_mut(&mut self) -> &mut Canvas {
        self.reel.current_frame_mut().canvas_mut()
    }

    /// A blank canvas of the current size, coloured per the profile's clear policy
    pub(crate) fn blank_canvas(&self) -> Canvas {
        Canvas::with_attribute(self.size.width_chars, self.size.height_chars, self.profile.clear_attribute(self.pen))
    }

    pub(crate) fn warn(&mut self, message: String) {
        log::warn!("{message}");
        self.last_warning = Some(message);
    }
}
