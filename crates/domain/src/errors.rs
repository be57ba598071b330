//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::Violation;

/// Main error type for Lodgely
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum LodgelyError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A uniqueness constraint (email, username) was violated
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {}", describe_violations(.0))]
    Validation(Vec<Violation>),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl LodgelyError {
    /// Violations carried by a validation failure, empty for other variants
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Validation(violations) => violations,
            _ => &[],
        }
    }
}

fn describe_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| format!("{}: {}", v.field, v.message))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type alias for Lodgely operations
pub type Result<T> = std::result::Result<T, LodgelyError>;
