//! Pooled SQLite connection wrapper

use std::ops::{Deref, DerefMut};

use r2d2::PooledConnection;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection as RusqliteConnection, Row, ToSql};
use tracing::instrument;

use crate::storage::error::{StorageError, StorageResult};

/// SQLite connection wrapper
///
/// Wraps a pooled rusqlite connection; the connection goes back to the pool
/// when dropped. Derefs to [`rusqlite::Connection`] for anything the wrapper
/// does not cover, such as transactions.
pub struct SqliteConnection {
    inner: PooledConnection<SqliteConnectionManager>,
}

impl SqliteConnection {
    /// Create a new connection wrapper from a pooled connection
    pub fn new(conn: PooledConnection<SqliteConnectionManager>) -> Self {
        Self { inner: conn }
    }

    /// Execute a statement, returning the number of affected rows
    #[instrument(skip(self, params), fields(sql = %sql))]
    pub fn execute(&self, sql: &str, params: &[&dyn ToSql]) -> StorageResult<usize> {
        self.inner.execute(sql, params).map_err(StorageError::from)
    }

    /// Execute a SQL query that returns a single row
    #[instrument(skip(self, params, f), fields(sql = %sql))]
    pub fn query_row<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> StorageResult<T>
    where
        F: FnOnce(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        self.inner.query_row(sql, params, f).map_err(StorageError::from)
    }

    /// Execute a SQL query that returns zero or one row
    pub fn query_optional<T, F>(
        &self,
        sql: &str,
        params: &[&dyn ToSql],
        f: F,
    ) -> StorageResult<Option<T>>
    where
        F: FnOnce(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        match self.query_row(sql, params, f) {
            Ok(value) => Ok(Some(value)),
            Err(StorageError::Rusqlite(rusqlite::Error::QueryReturnedNoRows)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Run a query and map every row
    #[instrument(skip(self, params, f), fields(sql = %sql))]
    pub fn query_map<T, F>(&self, sql: &str, params: &[&dyn ToSql], f: F) -> StorageResult<Vec<T>>
    where
        F: FnMut(&Row<'_>) -> Result<T, rusqlite::Error>,
    {
        let mut stmt = self.inner.prepare(sql)?;
        let rows = stmt.query_map(params, f)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(StorageError::from)
    }

    /// Execute several statements separated by semicolons
    pub fn execute_batch(&self, sql: &str) -> StorageResult<()> {
        self.inner.execute_batch(sql).map_err(StorageError::from)
    }
}

impl Deref for SqliteConnection {
    type Target = RusqliteConnection;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SqliteConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
