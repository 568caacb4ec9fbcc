use thiserror::Error;

/// Errors that can occur while setting up the scanning pipeline.
///
/// Individual probe failures are not errors at this level: they are carried
/// inside [`crate::ProbeOutcome::Failed`] and collapsed into "absent" by the
/// orchestrator, which has no fatal path once a scan is running.
#[derive(Debug, Error)]
pub enum ScanError {
    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias using `ScanError`.
pub type Result<T> = std::result::Result<T, ScanError>;
