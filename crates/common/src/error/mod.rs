//! Common error types and utilities
//!
//! Module errors implement [`ErrorClassification`] so callers can pick a log
//! level and decide whether a failed operation is worth retrying. Errors that
//! carry the name of the operation they failed in are wrapped as a
//! [`CommonError`]:
//!
//! ```rust,ignore
//! let err = StorageError::Query("no such table".into()).with_operation("health_check");
//! assert!(err.to_string().contains("health_check"));
//! ```
//!
//! | Level | Use Case |
//! |-------|----------|
//! | **Info** | Expected conditions |
//! | **Warning** | Lock contention, timeouts |
//! | **Error** | Failure requiring attention |
//! | **Critical** | Schema or invariant breakage |

use std::fmt;
use std::time::Duration;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Errors annotated with the operation they were raised in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Storage/database errors
    Storage { message: String, operation: Option<String> },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage { message, operation: Some(op) } => {
                write!(f, "Storage error during '{}': {}", op, message)
            }
            Self::Storage { message, operation: None } => write!(f, "Storage error: {}", message),
        }
    }
}

impl std::error::Error for CommonError {}

impl ErrorClassification for CommonError {
    fn is_retryable(&self) -> bool {
        false
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    fn is_critical(&self) -> bool {
        false
    }

    fn retry_after(&self) -> Option<Duration> {
        None
    }
}

impl CommonError {
    /// Create a storage error for a specific operation
    pub fn storage_op<S: Into<String>, O: Into<String>>(operation: O, message: S) -> Self {
        Self::Storage { message: message.into(), operation: Some(operation.into()) }
    }
}

/// Error classification trait for consistent error handling across modules
pub trait ErrorClassification {
    /// Check if this error is retryable
    ///
    /// Retryable errors are transient issues such as lock contention or
    /// timeouts that may succeed if attempted again.
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    fn is_critical(&self) -> bool;

    /// Get the suggested retry delay if applicable
    fn retry_after(&self) -> Option<Duration>;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}
