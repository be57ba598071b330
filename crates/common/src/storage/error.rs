//! Storage error types
//!
//! Defines error types for the storage layer, integrating with the common
//! error system.

use thiserror::Error;

use crate::error::{ErrorClassification, ErrorSeverity};

/// Storage error type
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(String),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Connection timeout after {0}s")]
    Timeout(u64),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Common(#[from] crate::CommonError),

    #[error(transparent)]
    Rusqlite(#[from] rusqlite::Error),

    #[error(transparent)]
    R2d2(#[from] r2d2::Error),
}

/// Storage result type
pub type StorageResult<T> = Result<T, StorageError>;

impl ErrorClassification for StorageError {
    /// Retryable errors are connection timeouts, connection failures and
    /// transient SQLite locks
    fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout(_) | Self::Connection(_) => true,
            Self::Rusqlite(err) => matches!(
                err.sqlite_error_code(),
                Some(rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked)
            ),
            Self::Common(common_err) => common_err.is_retryable(),
            _ => false,
        }
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Connection(_) | Self::Query(_) | Self::InvalidConfig(_) => ErrorSeverity::Error,
            Self::Migration(_) => ErrorSeverity::Critical,
            Self::Timeout(_) => ErrorSeverity::Warning,
            Self::Common(common_err) => common_err.severity(),
            Self::Rusqlite(_) | Self::R2d2(_) => ErrorSeverity::Error,
        }
    }

    fn is_critical(&self) -> bool {
        matches!(self, Self::Migration(_))
            || matches!(self, Self::Common(err) if err.is_critical())
    }

    fn retry_after(&self) -> Option<std::time::Duration> {
        match self {
            Self::Common(common_err) => common_err.retry_after(),
            _ => None,
        }
    }
}

impl StorageError {
    /// Add operation context to the error
    pub fn with_operation(self, operation: impl Into<String>) -> Self {
        Self::Common(crate::CommonError::storage_op(operation, self.to_string()))
    }

    /// Whether the underlying SQLite error is a UNIQUE constraint failure
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::Rusqlite(rusqlite::Error::SqliteFailure(err, _)) => {
                err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
            }
            _ => false,
        }
    }
}

/// Convert StorageError to CommonError for integration
impl From<StorageError> for crate::CommonError {
    fn from(err: StorageError) -> Self {
        if let StorageError::Common(common_err) = err {
            return common_err;
        }

        crate::CommonError::Storage { message: err.to_string(), operation: None }
    }
}
