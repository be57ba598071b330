//! Storage primitives for SQLite databases
//!
//! Provides an r2d2-based connection pool, a thin connection wrapper and the
//! storage error type shared by repositories.

pub mod config;
pub mod connection;
pub mod error;
pub mod pool;
pub mod pragmas;

// Re-export commonly used types
pub use config::SqlitePoolConfig;
pub use connection::SqliteConnection;
pub use error::{StorageError, StorageResult};
pub use pool::SqlitePool;
pub use pragmas::apply_connection_pragmas;
