//! # Engine Errors

use thiserror::Error;

use crate::store::StoreError;

/// Result type for query and mutation operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Failures raised by the query and mutation engines
#[derive(Debug, Error)]
pub enum EngineError {
    /// The requested or filtered record set is empty
    #[error("Resource not found")]
    NotFound,

    /// Malformed input, or a write/delete that cannot complete
    #[error("Unprocessable: {0}")]
    Unprocessable(String),

    /// The store failed while reading
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Engine-side failure unrelated to the store, such as a poisoned lock
    #[error("Internal error: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn unprocessable(reason: impl Into<String>) -> Self {
        EngineError::Unprocessable(reason.into())
    }
}
