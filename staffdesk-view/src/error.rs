//! View error types

use staffdesk_client::ClientError;
use thiserror::Error;

/// Controller error type
#[derive(Debug, Error)]
pub enum ViewError {
    /// Network operation failed
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Reorder index outside the current view
    #[error("Index {index} out of range for view of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Draft rejected before any network call
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Type alias for Result with ViewError
pub type ViewResult<T> = Result<T, ViewError>;
