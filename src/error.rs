//! Error taxonomy shared across ports and the application service.

use thiserror::Error;

/// Failures of the workspace store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No workspace directory exists for the given id.
    #[error("workspace {0} not found")]
    NotFound(String),

    /// The underlying filesystem operation failed.
    #[error("storage failure: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of a download request.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The request carried a missing or malformed source URL.
    /// Raised before any workspace is allocated.
    #[error("{0}")]
    InvalidUrl(String),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The external tool failed to launch, exited non-zero, or exited
    /// cleanly without producing an output file. Carries the tool's
    /// diagnostic output. Always triggers workspace rollback.
    #[error("Download failed: {0}")]
    Execution(String),
}
