//! # Store Errors

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    /// The write violated a schema constraint (foreign key, check, not null)
    #[error("Constraint violated: {0}")]
    Constraint(String),

    /// The store handle was released
    #[error("Store is closed")]
    Closed,

    #[error("SQLite error: {0}")]
    Sqlite(rusqlite::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl StoreError {
    /// True when the store refused a write rather than failing to perform it
    pub fn is_rejection(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err.sqlite_error_code() {
            Some(ErrorCode::ConstraintViolation) => StoreError::Constraint(err.to_string()),
            _ => StoreError::Sqlite(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_is_rejection() {
        assert!(StoreError::Constraint("fk".into()).is_rejection());
        assert!(!StoreError::Closed.is_rejection());
        assert!(!StoreError::Internal("boom".into()).is_rejection());
    }

    #[test]
    fn test_non_constraint_sqlite_error_is_kept() {
        let err = StoreError::from(rusqlite::Error::QueryReturnedNoRows);
        assert!(matches!(err, StoreError::Sqlite(_)));
    }
}
