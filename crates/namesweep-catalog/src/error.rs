use thiserror::Error;

/// Errors that can occur while loading or parsing the platform catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP failure fetching the remote catalog document
    #[error("catalog fetch failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog document is not valid JSON (or not a top-level object)
    #[error("catalog parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    /// I/O failure reading a local catalog file
    #[error("catalog I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using `CatalogError`.
pub type Result<T> = std::result::Result<T, CatalogError>;
