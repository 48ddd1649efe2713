use std::io;

use thiserror::Error;

/// Library-wide error type for framework operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// Diagnostics serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// The deployed workspace failed its health check.
    #[error("framework check found {0} issue(s)")]
    Unhealthy(usize),
}
