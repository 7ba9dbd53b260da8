//! Error types for the scene exporter.

use thiserror::Error;

/// Result type alias using ExportError.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for scene export operations.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The scene has no active camera; nothing can be exported without one.
    #[error("no active camera found in the scene")]
    NoActiveCamera,

    /// A mesh's evaluated geometry is malformed (bad index, degenerate polygon).
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Failed to serialize the scene document.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while writing the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
