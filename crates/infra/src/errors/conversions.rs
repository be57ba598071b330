//! Conversions from external infrastructure errors into domain errors.

use lodgely_common::storage::StorageError;
use lodgely_domain::LodgelyError;
use rusqlite::Error as SqlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub LodgelyError);

impl From<InfraError> for LodgelyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<LodgelyError> for InfraError {
    fn from(value: LodgelyError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoLodgelyError {
    fn into_lodgely(self) -> LodgelyError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → LodgelyError */
/* -------------------------------------------------------------------------- */

impl IntoLodgelyError for SqlError {
    fn into_lodgely(self) -> LodgelyError {
        use rusqlite::ffi::{ErrorCode, SQLITE_CONSTRAINT_FOREIGNKEY, SQLITE_CONSTRAINT_UNIQUE};
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        LodgelyError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        LodgelyError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_UNIQUE) => {
                        LodgelyError::Conflict(unique_conflict_message(&message))
                    }
                    (ErrorCode::ConstraintViolation, SQLITE_CONSTRAINT_FOREIGNKEY) => {
                        LodgelyError::Database("foreign key constraint violation".into())
                    }
                    _ => LodgelyError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => LodgelyError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                LodgelyError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                LodgelyError::Database(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(..) => LodgelyError::Database("invalid UTF-8 returned from sqlite".into()),
            RE::InvalidPath(path) => LodgelyError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => LodgelyError::Database(other.to_string()),
        }
    }
}

/// SQLite reports `UNIQUE constraint failed: profiles.email`; keep the
/// column name when present.
fn unique_conflict_message(message: &str) -> String {
    match message.rsplit_once('.') {
        Some((_, column)) if !column.is_empty() => format!("{column} is already in use"),
        _ => "unique constraint violation".to_string(),
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_lodgely())
    }
}

/* -------------------------------------------------------------------------- */
/* StorageError → LodgelyError */
/* -------------------------------------------------------------------------- */

impl IntoLodgelyError for StorageError {
    fn into_lodgely(self) -> LodgelyError {
        match self {
            StorageError::Rusqlite(err) => err.into_lodgely(),
            StorageError::Timeout(secs) => {
                LodgelyError::Database(format!("timed out after {secs}s waiting for a connection"))
            }
            StorageError::Connection(msg) | StorageError::Query(msg) => {
                LodgelyError::Database(msg)
            }
            StorageError::Migration(msg) => {
                LodgelyError::Database(format!("Migration error: {msg}"))
            }
            StorageError::InvalidConfig(msg) => LodgelyError::Config(msg),
            other => LodgelyError::Database(format!("Storage error: {other}")),
        }
    }
}

impl From<StorageError> for InfraError {
    fn from(value: StorageError) -> Self {
        InfraError(value.into_lodgely())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → LodgelyError */
/* -------------------------------------------------------------------------- */

impl IntoLodgelyError for serde_json::Error {
    fn into_lodgely(self) -> LodgelyError {
        LodgelyError::Internal(format!("profile payload (de)serialization failed: {self}"))
    }
}

impl From<serde_json::Error> for InfraError {
    fn from(value: serde_json::Error) -> Self {
        InfraError(value.into_lodgely())
    }
}
