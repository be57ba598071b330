//! # Lodgely Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - SQLite persistence for profiles and their owned records
//! - Configuration loading (environment, JSON and TOML files)
//! - Logging initialisation
//!
//! ## Architecture
//! - Implements traits defined in `lodgely-core`
//! - Contains all "impure" code (I/O)

pub mod config;
pub mod database;
pub mod errors;
pub mod observability;

// Re-export commonly used items
pub use database::*;
pub use errors::InfraError;
pub use observability::init_logging;
