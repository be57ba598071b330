//! Modular common utilities shared across Lodgely crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors and the validation framework
//! - `observability`: tracing instrumentation (not included by default)
//! - `storage`: pooled SQLite connections

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod validation;

// Storage tier
// --------------------------------------------------------------------
#[cfg(feature = "storage")]
pub mod storage;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "storage")]
pub use storage::{SqliteConnection, SqlitePool, SqlitePoolConfig, StorageError, StorageResult};
#[cfg(feature = "foundation")]
pub use validation::{
    EmailValidator, FieldError, FieldValidator, IbanValidator, RangeValidator, Rejection,
    StringValidator, Validator,
};
