use thiserror::Error;

/// Errors that can occur while formatting or writing exports.
#[derive(Debug, Error)]
pub enum ExportError {
    /// JSON serialization failed
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the export file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `ExportError`.
pub type Result<T> = std::result::Result<T, ExportError>;
