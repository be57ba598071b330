//! SQLite connection pool configuration

use std::time::Duration;

/// SQLite pool configuration
#[derive(Debug, Clone)]
pub struct SqlitePoolConfig {
    /// Maximum number of connections in the pool
    pub max_size: u32,

    /// Connection timeout
    pub connection_timeout: Duration,

    /// Busy timeout for SQLite operations
    pub busy_timeout: Duration,

    /// Enable WAL journal mode
    pub enable_wal: bool,

    /// Enable foreign key constraints
    pub enable_foreign_keys: bool,
}

impl Default for SqlitePoolConfig {
    fn default() -> Self {
        Self {
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
            busy_timeout: Duration::from_millis(5000),
            enable_wal: true,
            enable_foreign_keys: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SqlitePoolConfig::default();

        assert_eq!(config.max_size, 10, "Default pool size should be 10");
        assert_eq!(config.connection_timeout, Duration::from_secs(5));
        assert!(config.enable_wal, "WAL mode should be enabled by default");
        assert!(config.enable_foreign_keys, "Foreign keys should be enabled by default");
    }
}
