//! Drawing tools and the transient state of the pointer gesture.

use zx_engine::Position;

/// Available drawing tools
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
    /// Freehand ink
    #[default]
    Pencil,
    /// Two-click straight line
    Line,
    /// Freehand erase
    Rubber,
    /// Paint the paper of one character cell
    Bucket,
    /// Move the view; never touches the data
    Pan,
}

impl Tool {
    /// Get the display name
    pub fn name(&self) -> &'static str {
        match self {
            Tool::Pencil => "Pencil",
            Tool::Line => "Line",
            Tool::Rubber => "Rubber",
            Tool::Bucket => "Bucket",
            Tool::Pan => "Pan",
        }
    }

    /// Whether dragging with the pointer down repeats the tool action
    pub fn is_freehand(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Rubber)
    }
}

/// Where the line tool is in its two-click cycle
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinePhase {
    AwaitingStart,
    AwaitingEnd,
}

/// Current tool plus the state of the gesture in progress.
///
/// Line anchors never outlive a tool change.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolState {
    pub(crate) tool: Tool,
    pub(crate) is_drawing: bool,
    pub(crate) line_start: Option<Position>,
    pub(crate) line_preview: Option<Position>,
}

impl ToolState {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn is_drawing(&self) -> bool {
        self.is_drawing
    }

    pub fn line_start(&self) -> Option<Position> {
        self.line_start
    }

    pub fn line_preview(&self) -> Option<Position> {
        self.line_preview
    }

    pub fn line_phase(&self) -> LinePhase {
        if self.line_start.is_some() { LinePhase::AwaitingEnd } else { LinePhase::AwaitingStart }
    }

    /// Switch tools. Always drops line anchors, even when reselecting the same tool.
    pub fn select(&mut self, tool: Tool) {
        self.tool = tool;
        self.reset_line();
    }

    pub fn reset_line(&mut self) {
        self.line_start = None;
        self.line_preview = None;
    }

    /// Back to the initial state (used after loads)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
