//! SQLite connection pool
//!
//! Provides r2d2-based connection pooling with per-connection pragmas.

use std::path::Path;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use tracing::{debug, info, instrument, warn};

use super::config::SqlitePoolConfig;
use super::connection::SqliteConnection;
use super::pragmas::apply_connection_pragmas;
use crate::storage::error::{StorageError, StorageResult};

/// SQLite connection pool
///
/// Every connection handed out has had [`apply_connection_pragmas`] applied,
/// so foreign keys are enforced on all of them.
#[derive(Debug)]
pub struct SqlitePool {
    pool: Pool<SqliteConnectionManager>,
    config: SqlitePoolConfig,
}

impl SqlitePool {
    /// Create a new connection pool for the database file at `path`
    ///
    /// # Errors
    /// Returns an error if the database file can't be opened or the pool
    /// can't be built.
    #[instrument(skip(config), fields(db_path = ?path, pool_size = config.max_size))]
    pub fn new(path: &Path, config: SqlitePoolConfig) -> StorageResult<Self> {
        info!("Creating SQLite connection pool");

        if config.max_size == 0 {
            return Err(StorageError::InvalidConfig("pool size must be at least 1".into()));
        }

        let pool_config = config.clone();
        let manager = SqliteConnectionManager::file(path).with_init(move |conn| {
            apply_connection_pragmas(conn, &pool_config)
                .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
        });

        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .map_err(|e| {
                warn!("Failed to create connection pool: {}", e);
                StorageError::Connection(format!("Failed to create pool: {}", e))
            })?;

        info!("SQLite pool created with {} connections", config.max_size);

        Ok(Self { pool, config })
    }

    /// Get a connection from the pool
    #[instrument(skip(self), fields(pool_size = self.config.max_size))]
    pub fn get_connection(&self) -> StorageResult<SqliteConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                debug!("Connection acquired in {}ms", start.elapsed().as_millis());
                Ok(SqliteConnection::new(conn))
            }
            Err(e) => {
                let err_str = e.to_string().to_lowercase();

                if err_str.contains("timed out") || err_str.contains("timeout") {
                    warn!("Connection timeout after {:?}", self.config.connection_timeout);
                    Err(StorageError::Timeout(self.config.connection_timeout.as_secs()))
                } else {
                    warn!("Connection error: {}", e);
                    Err(StorageError::Connection(format!("Failed to get connection: {}", e)))
                }
            }
        }
    }

    /// Maximum number of pooled connections
    pub fn max_size(&self) -> u32 {
        self.config.max_size
    }
}
