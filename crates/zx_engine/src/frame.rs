use crate::Canvas;

/// Default frame duration in milliseconds (8 frames per second).
pub const DEFAULT_FRAME_DURATION: u32 = 125;

/// One animation frame: a full canvas snapshot plus identity and timing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    id: String,
    name: String,
    canvas: Canvas,
    duration_ms: u32,
}

impl Frame {
    pub fn new(id: impl Into<String>, name: impl Into<String>, canvas: Canvas) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            canvas,
            duration_ms: DEFAULT_FRAME_DURATION,
        }
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Deep copy under a new id, named `"<name> (copy)"`.
    pub fn duplicate(&self, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: format!("{} (copy)", self.name),
            canvas: self.canvas.clone(),
            duration_ms: self.duration_ms,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Replace the frame's pixel/attribute data wholesale.
    pub fn set_canvas(&mut self, canvas: Canvas) {
        self.canvas = canvas;
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn set_duration_ms(&mut self, duration_ms: u32) {
        self.duration_ms = duration_ms;
    }
}
