//! # Lodgely Domain
//!
//! Marketplace member model for Lodgely.
//!
//! This crate contains:
//! - The [`Profile`] entity and the child records it owns
//! - Entity capabilities (timestamps, slugs, translations)
//! - Validation scenarios and violations
//! - Domain error types and Result definitions
//! - Configuration structures
//!
//! ## Architecture
//! - No dependencies on other Lodgely crates
//! - Only external dependencies allowed
//! - No I/O: validation and persistence live in `lodgely-core` and
//!   `lodgely-infra`

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
