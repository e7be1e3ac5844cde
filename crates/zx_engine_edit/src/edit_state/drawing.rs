//! Drawing operations for the editor
//!
//! Direct mutators (`set_pixel`, `draw_line`, `bucket_fill`) and the pointer
//! gesture handlers that map the selected tool onto them. Coordinates are in
//! pixels; anything outside the canvas is silently ignored.

use zx_engine::{Position, raster};

use crate::tools::Tool;

use super::EditState;

impl EditState {
    /// Set or clear one pixel.
    ///
    /// Setting ink also stamps the pen's ink/bright into the owning cell.
    /// Erasing leaves the cell attribute as it is.
    pub fn set_pixel(&mut self, x: i32, y: i32, is_ink: bool) {
        if !self.can_edit() {
            return;
        }
        let pen = self.pen;
        self.current_canvas_mut().set_pixel(x, y, is_ink, pen);
    }

    /// Draw a line in ink, one attribute write per touched cell
    pub fn draw_line(&mut self, from: Position, to: Position) {
        if !self.can_edit() {
            return;
        }
        let pen = self.pen;
        self.current_canvas_mut().draw_line(from, to, pen);
    }

    /// Paint the paper of the single cell containing `(x, y)`
    pub fn bucket_fill(&mut self, x: i32, y: i32) {
        if !self.can_edit() {
            return;
        }
        let pen = self.pen;
        self.current_canvas_mut().bucket_fill(x, y, pen);
    }

    pub fn select_tool(&mut self, tool: Tool) {
        self.tool_state.select(tool);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Pointer handling
    // ═══════════════════════════════════════════════════════════════════════

    pub fn pointer_down(&mut self, pos: Position) {
        if !self.can_edit() {
            return;
        }
        match self.tool_state.tool {
            tool if tool.is_freehand() => {
                self.tool_state.is_drawing = true;
                self.set_pixel(pos.x, pos.y, tool == Tool::Pencil);
            }
            Tool::Bucket => self.bucket_fill(pos.x, pos.y),
            Tool::Line => {
                if !self.canvas().is_inside(pos.x, pos.y) {
                    return;
                }
                match self.tool_state.line_start {
                    None => {
                        self.tool_state.line_start = Some(pos);
                        self.tool_state.line_preview = Some(pos);
                    }
                    Some(start) => {
                        self.draw_line(start, pos);
                        self.tool_state.reset_line();
                    }
                }
            }
            Tool::Pan | Tool::Pencil | Tool::Rubber => {}
        }
    }

    pub fn pointer_move(&mut self, pos: Position) {
        if !self.can_edit() {
            return;
        }
        match self.tool_state.tool {
            tool if tool.is_freehand() && self.tool_state.is_drawing => self.set_pixel(pos.x, pos.y, tool == Tool::Pencil),
            Tool::Line if self.tool_state.line_start.is_some() => {
                let canvas = self.canvas();
                let clamped = Position::new(pos.x.clamp(0, canvas.width() - 1), pos.y.clamp(0, canvas.height() - 1));
                self.tool_state.line_preview = Some(clamped);
            }
            _ => {}
        }
    }

    pub fn pointer_up(&mut self) {
        self.tool_state.is_drawing = false;
    }

    /// Rubber-band raster between the line anchor and the pointer
    pub fn line_preview_points(&self) -> Vec<Position> {
        match (self.tool_state.line_start, self.tool_state.line_preview) {
            (Some(start), Some(end)) => raster::line_points(start, end),
            _ => Vec::new(),
        }
    }
}
