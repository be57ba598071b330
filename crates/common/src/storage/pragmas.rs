//! SQLite pragma management
//!
//! Applies per-connection pragmas when the pool opens a connection.

use rusqlite::Connection;

use super::config::SqlitePoolConfig;
use crate::storage::error::{StorageError, StorageResult};

/// Apply connection-level pragmas
///
/// These pragmas are applied to each connection in the pool:
/// - WAL mode for better concurrency
/// - NORMAL synchronous mode
/// - Foreign key constraints (required for cascading deletes)
/// - Busy timeout for handling lock contention
pub fn apply_connection_pragmas(conn: &Connection, config: &SqlitePoolConfig) -> StorageResult<()> {
    let mut pragma_sql = String::new();

    if config.enable_wal {
        pragma_sql.push_str("PRAGMA journal_mode=WAL;\n");
        pragma_sql.push_str("PRAGMA wal_autocheckpoint=1000;\n");
    }

    pragma_sql.push_str("PRAGMA synchronous=NORMAL;\n");

    if config.enable_foreign_keys {
        pragma_sql.push_str("PRAGMA foreign_keys=ON;\n");
    }

    conn.execute_batch(&pragma_sql)
        .map_err(|e| StorageError::Query(format!("Failed to apply pragmas: {}", e)))?;

    // Set busy timeout (separate call as it takes a parameter)
    conn.busy_timeout(config.busy_timeout)
        .map_err(|e| StorageError::Query(format!("Failed to set busy timeout: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_apply_pragmas() {
        let temp_dir = TempDir::new().unwrap();
        let conn = Connection::open(temp_dir.path().join("test.db")).unwrap();

        apply_connection_pragmas(&conn, &SqlitePoolConfig::default()).unwrap();

        let journal_mode: String =
            conn.pragma_query_value(None, "journal_mode", |row| row.get(0)).unwrap();
        assert_eq!(journal_mode.to_lowercase(), "wal");

        let foreign_keys: i32 =
            conn.pragma_query_value(None, "foreign_keys", |row| row.get(0)).unwrap();
        assert_eq!(foreign_keys, 1);
    }
}
