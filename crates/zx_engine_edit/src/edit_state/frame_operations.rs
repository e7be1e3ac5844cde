//! Frame management and playback
//!
//! Only the sprite profile is animated. For every other profile these calls
//! leave the single frame alone. Structural edits are refused while playing.

use super::EditState;

impl EditState {
    fn can_edit_frames(&self) -> bool {
        self.profile.is_animated() && !self.reel.is_playing()
    }

    /// Append a blank frame and select it. False at the frame limit.
    pub fn add_frame(&mut self) -> bool {
        if !self.can_edit_frames() {
            return false;
        }
        let canvas = self.blank_canvas();
        let added = self.reel.add_frame(canvas);
        if added {
            self.tool_state.reset_line();
        }
        added
    }

    pub fn duplicate_frame(&mut self) -> bool {
        if !self.can_edit_frames() {
            return false;
        }
        let duplicated = self.reel.duplicate_frame();
        if duplicated {
            self.tool_state.reset_line();
        }
        duplicated
    }

    pub fn delete_frame(&mut self) -> bool {
        if !self.can_edit_frames() {
            return false;
        }
        let deleted = self.reel.delete_frame();
        if deleted {
            self.tool_state.reset_line();
        }
        deleted
    }

    pub fn reorder_frames(&mut self, from: usize, to: usize) -> bool {
        self.can_edit_frames() && self.reel.reorder_frames(from, to)
    }

    pub fn set_current_frame(&mut self, index: usize) {
        if !self.can_edit_frames() {
            return;
        }
        if index != self.reel.current_frame_index() {
            self.tool_state.reset_line();
        }
        self.reel.set_current_frame(index);
    }

    pub fn rename_frame(&mut self, index: usize, name: impl Into<String>) {
        if self.profile.is_animated() {
            self.reel.rename_frame(index, name);
        }
    }

    pub fn set_frame_duration(&mut self, index: usize, duration_ms: u32) {
        if self.profile.is_animated() {
            self.reel.set_frame_duration(index, duration_ms);
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Playback
    // ═══════════════════════════════════════════════════════════════════════

    pub fn fps(&self) -> u32 {
        self.reel.fps()
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.reel.set_fps(fps);
    }

    pub fn is_looping(&self) -> bool {
        self.reel.is_looping()
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.reel.set_looping(looping);
    }

    /// Start playback. Drops any pending gesture since drawing is disabled
    /// until playback stops.
    pub fn play(&mut self, now_ms: u64) -> bool {
        if !self.profile.is_animated() {
            return false;
        }
        let started = self.reel.play(now_ms);
        if started {
            self.tool_state.is_drawing = false;
            self.tool_state.reset_line();
        }
        started
    }

    pub fn stop(&mut self) {
        self.reel.stop();
    }

    pub fn toggle_playback(&mut self, now_ms: u64) -> bool {
        if self.reel.is_playing() {
            self.stop();
            false
        } else {
            self.play(now_ms)
        }
    }

    /// Drive playback from the host's clock. True when the shown frame changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.reel.tick(now_ms)
    }
}
