//! Host-driven playback.
//!
//! There is no timer inside the engine: the host calls [`AnimationReel::tick`]
//! with a monotonic millisecond clock at whatever cadence it likes. Stopping
//! playback means later ticks do nothing, so cancellation needs no handle.

use super::AnimationReel;

impl AnimationReel {
    /// Milliseconds between two frame advances (`1000 / fps`).
    pub fn frame_period_ms(&self) -> u64 {
        (1000 / self.fps.max(1) as u64).max(1)
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.max(1);
    }

    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Start playing at time `now_ms`.
    ///
    /// Needs at least two frames. A non-looping reel parked on its last frame
    /// restarts from the first one.
    pub fn play(&mut self, now_ms: u64) -> bool {
        if self.frames.len() <= 1 {
            return false;
        }
        if !self.looping && self.current_frame == self.frames.len() - 1 {
            self.current_frame = 0;
        }
        self.is_playing = true;
        self.last_tick_ms = now_ms;
        log::debug!("playback started at {} fps", self.fps);
        true
    }

    /// Stop playing. No frame advance happens after this returns.
    pub fn stop(&mut self) {
        if self.is_playing {
            log::debug!("playback stopped on frame {}", self.current_frame);
        }
        self.is_playing = false;
    }

    pub fn toggle_playback(&mut self, now_ms: u64) -> bool {
        if self.is_playing {
            self.stop();
            false
        } else {
            self.play(now_ms)
        }
    }

    /// Advance by however many whole frame periods elapsed since the last
    /// advance. Returns true when the visible frame changed.
    ///
    /// At the end of the reel playback wraps to the first frame when looping,
    /// otherwise it stops on the last frame.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.is_playing || self.frames.len() <= 1 {
            return false;
        }
        let period = self.frame_period_ms();
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        let steps = elapsed / period;
        if steps == 0 {
            return false;
        }
        self.last_tick_ms += steps * period;

        let start = self.current_frame;
        let len = self.frames.len() as u64;
        let current = self.current_frame as u64;
        if self.looping {
            self.current_frame = ((current + steps % len) % len) as usize;
        } else {
            let remaining = len - 1 - current;
            if steps <= remaining {
                self.current_frame = (current + steps) as usize;
            } else {
                self.current_frame = self.frames.len() - 1;
                self.stop();
            }
        }
        self.current_frame != start
    }
}
