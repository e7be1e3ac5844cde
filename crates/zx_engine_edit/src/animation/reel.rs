//! Animation reel
//!
//! Ordered frames plus a selection cursor. The reel always holds at least one
//! frame and `current_frame` always indexes a valid frame.

use zx_engine::{Canvas, EngineError, Frame, MAX_FRAMES, Result};

/// Default playback speed in frames per second.
pub const DEFAULT_FPS: u32 = 8;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnimationReel {
    pub(crate) frames: Vec<Frame>,
    pub(crate) current_frame: usize,
    pub(crate) fps: u32,
    pub(crate) looping: bool,

    // Transient playback state
    pub(crate) is_playing: bool,
    pub(crate) last_tick_ms: u64,

    next_id: u64,
}

impl AnimationReel {
    /// A reel holding a single frame built from `canvas`.
    pub fn new(canvas: Canvas) -> Self {
        let mut reel = Self {
            frames: Vec::new(),
            current_frame: 0,
            fps: DEFAULT_FPS,
            looping: true,
            is_playing: false,
            last_tick_ms: 0,
            next_id: 0,
        };
        let id = reel.next_frame_id();
        reel.frames.push(Frame::new(id, "Frame 1", canvas));
        reel
    }

    /// Rebuild a reel from loaded frames.
    ///
    /// # Errors
    ///
    /// Fails for an empty frame list.
    pub fn from_frames(frames: Vec<Frame>, current_frame: usize, fps: u32, looping: bool) -> Result<Self> {
        if frames.is_empty() {
            return Err(EngineError::invalid_document("an animation needs at least one frame"));
        }
        let current_frame = current_frame.min(frames.len() - 1);
        let next_id = frames.len() as u64;
        let mut reel = Self {
            frames,
            current_frame,
            fps: fps.max(1),
            looping,
            is_playing: false,
            last_tick_ms: 0,
            next_id,
        };
        reel.ensure_unique_ids();
        Ok(reel)
    }

    /// Give frames with missing or repeated ids a fresh one.
    fn ensure_unique_ids(&mut self) {
        let mut seen = std::collections::HashSet::new();
        for i in 0..self.frames.len() {
            let id = self.frames[i].id().to_string();
            if id.is_empty() || !seen.insert(id) {
                let fresh = self.next_frame_id();
                seen.insert(fresh.clone());
                let frame = &self.frames[i];
                let replaced = Frame::new(fresh, frame.name(), frame.canvas().clone()).with_duration(frame.duration_ms());
                self.frames[i] = replaced;
            }
        }
    }

    pub(crate) fn next_frame_id(&mut self) -> String {
        loop {
            self.next_id += 1;
            let id = format!("frame-{}", self.next_id);
            if !self.frames.iter().any(|f| f.id() == id) {
                return id;
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Getters
    // ═══════════════════════════════════════════════════════════════════════

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Never true; a reel always has a frame. Present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn current_frame_index(&self) -> usize {
        self.current_frame
    }

    pub fn current_frame(&self) -> &Frame {
        &self.frames[self.current_frame]
    }

    pub fn current_frame_mut(&mut self) -> &mut Frame {
        &mut self.frames[self.current_frame]
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Frame management
    // ═══════════════════════════════════════════════════════════════════════

    /// Select a frame. Out-of-range indices are clamped to the last frame.
    pub fn set_current_frame(&mut self, index: usize) {
        self.current_frame = index.min(self.frames.len() - 1);
    }

    /// Append a frame holding `canvas` and select it. No-op at [`MAX_FRAMES`].
    pub fn add_frame(&mut self, canvas: Canvas) -> bool {
        if self.frames.len() >= MAX_FRAMES {
            return false;
        }
        let id = self.next_frame_id();
        let name = format!("Frame {}", self.frames.len() + 1);
        self.frames.push(Frame::new(id, name, canvas));
        self.current_frame = self.frames.len() - 1;
        log::debug!("added frame {}", self.current_frame);
        true
    }

    /// Deep copy the current frame, insert it right after and select it.
    pub fn duplicate_frame(&mut self) -> bool {
        if self.frames.len() >= MAX_FRAMES {
            return false;
        }
        let id = self.next_frame_id();
        let copy = self.current_frame().duplicate(id);
        self.frames.insert(self.current_frame + 1, copy);
        self.current_frame += 1;
        true
    }

    /// Remove the current frame. The last remaining frame cannot be deleted.
    pub fn delete_frame(&mut self) -> bool {
        if self.frames.len() <= 1 {
            return false;
        }
        self.frames.remove(self.current_frame);
        self.current_frame = self.current_frame.min(self.frames.len() - 1);
        true
    }

    /// Move the frame at `from` to position `to` (remove, then insert).
    ///
    /// The selection follows the moved frame; a selection the move jumps over
    /// shifts by one.
    pub fn reorder_frames(&mut self, from: usize, to: usize) -> bool {
        let len = self.frames.len();
        if from >= len || to >= len || from == to {
            return false;
        }
        let frame = self.frames.remove(from);
        self.frames.insert(to, frame);

        let current = self.current_frame;
        self.current_frame = if current == from {
            to
        } else if from < current && to >= current {
            current - 1
        } else if from > current && to <= current {
            current + 1
        } else {
            current
        };
        true
    }

    pub fn rename_frame(&mut self, index: usize, name: impl Into<String>) {
        if let Some(frame) = self.frames.get_mut(index) {
            frame.set_name(name);
        }
    }

    pub fn set_frame_duration(&mut self, index: usize, duration_ms: u32) {
        if let Some(frame) = self.frames.get_mut(index) {
            frame.set_duration_ms(duration_ms.max(1));
        }
    }

    /// Apply `f` to every frame's canvas (used by resize and clear-all).
    pub(crate) fn map_canvases(&mut self, mut f: impl FnMut(&Canvas) -> Canvas) {
        for frame in &mut self.frames {
            let canvas = f(frame.canvas());
            frame.set_canvas(canvas);
        }
    }
}
