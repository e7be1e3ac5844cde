//! Unified error types for zx_engine

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for zx_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === I/O Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read file '{path}': {message}")]
    ReadFile { path: PathBuf, message: String },

    // === Size Errors ===
    #[error("{width}x{height} characters exceeds the maximum of {max} characters")]
    CellBudgetExceeded { width: i32, height: i32, max: i32 },

    #[error("Invalid size: {message}")]
    InvalidSize { message: String },

    // === Project Errors ===
    #[error("Wrong project type: expected {expected}, found {found}")]
    WrongProjectType { expected: String, found: String },

    #[error("Unsupported {kind} size: {size}")]
    UnsupportedSize { kind: String, size: String },

    #[error("Invalid project document: {message}")]
    InvalidDocument { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Export Errors ===
    #[error("Nothing to export: the project is blank")]
    BlankExport,

    #[error("Drawn area of {cells} characters exceeds the export limit of {max} characters")]
    ExportTooLarge { cells: i32, max: i32 },

    // === Editor Errors ===
    #[error("The sprite is playing; stop playback before editing")]
    PlaybackActive,
}

/// Result type alias for zx_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    pub fn invalid_size(msg: impl Into<String>) -> Self {
        Self::InvalidSize { message: msg.into() }
    }

    pub fn invalid_document(msg: impl Into<String>) -> Self {
        Self::InvalidDocument { message: msg.into() }
    }

    /// Create a read file error
    pub fn read_file(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::ReadFile {
            path: path.into(),
            message: msg.into(),
        }
    }
}
