//! Profile repository implementation using SQLite
//!
//! A profile is stored as one `profiles` row holding its scalar attributes
//! as JSON, plus one `profile_records` row per entry of each owned
//! collection. Saving replaces the owned rows inside a transaction; deleting
//! the profile row cascades to them.

use std::sync::Arc;

use async_trait::async_trait;
use lodgely_common::storage::{SqliteConnection, StorageError};
use lodgely_core::user::ports::ProfileRepository as ProfileRepositoryPort;
use lodgely_domain::{
    LodgelyError, Profile, ProfileId, Result as DomainResult, SluggableEntity, TimestampedEntity,
};
use rusqlite::{params, OptionalExtension};
use serde_json::{Map, Value};
use tokio::task;
use tracing::{debug, warn};

use super::manager::DbManager;
use crate::errors::InfraError;

/// Storage key of the single linked social account
const SOCIAL_ACCOUNT: &str = "social_account";

/// SQLite-backed implementation of `ProfileRepository`
pub struct SqliteProfileRepository {
    db: Arc<DbManager>,
}

impl SqliteProfileRepository {
    /// Create a new repository instance
    pub fn new(db: Arc<DbManager>) -> Self {
        Self { db }
    }

    async fn load_by(&self, lookup: Lookup) -> DomainResult<Option<Profile>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<Option<Profile>> {
            let conn = db.get_connection()?;
            load_profile(&conn, &lookup)
        })
        .await
        .map_err(map_join_error)?
    }
}

#[async_trait]
impl ProfileRepositoryPort for SqliteProfileRepository {
    async fn get_by_id(&self, id: ProfileId) -> DomainResult<Option<Profile>> {
        self.load_by(Lookup::Id(id.to_string())).await
    }

    async fn get_by_email(&self, email: &str) -> DomainResult<Option<Profile>> {
        self.load_by(Lookup::Email(email.to_string())).await
    }

    async fn get_by_username(&self, username: &str) -> DomainResult<Option<Profile>> {
        self.load_by(Lookup::Username(username.to_string())).await
    }

    async fn save(&self, profile: &Profile) -> DomainResult<()> {
        let db = Arc::clone(&self.db);
        let profile = profile.clone();

        task::spawn_blocking(move || -> DomainResult<()> {
            let mut conn = db.get_connection()?;
            write_profile(&mut conn, &profile)
        })
        .await
        .map_err(map_join_error)?
    }

    async fn delete(&self, id: ProfileId) -> DomainResult<bool> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> DomainResult<bool> {
            let conn = db.get_connection()?;
            let deleted = conn
                .execute("DELETE FROM profiles WHERE id = ?1", params![id.to_string()])
                .map_err(map_storage_error)?;
            debug!(profile_id = %id, deleted, "profile delete executed");
            Ok(deleted > 0)
        })
        .await
        .map_err(map_join_error)?
    }
}

// =============================================================================
// Queries
// =============================================================================

/// Column a profile is looked up by
enum Lookup {
    Id(String),
    Email(String),
    Username(String),
}

impl Lookup {
    fn sql(&self) -> &'static str {
        match self {
            Self::Id(_) => "SELECT id, payload FROM profiles WHERE id = ?1",
            Self::Email(_) => "SELECT id, payload FROM profiles WHERE email = ?1",
            Self::Username(_) => "SELECT id, payload FROM profiles WHERE username = ?1",
        }
    }

    fn value(&self) -> &str {
        match self {
            Self::Id(value) | Self::Email(value) | Self::Username(value) => value,
        }
    }
}

fn load_profile(conn: &SqliteConnection, lookup: &Lookup) -> DomainResult<Option<Profile>> {
    let row = conn
        .query_optional(lookup.sql(), params![lookup.value()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })
        .map_err(map_storage_error)?;

    let Some((id, payload)) = row else {
        return Ok(None);
    };

    let mut document: Map<String, Value> = serde_json::from_str(&payload).map_err(map_json_error)?;
    for name in Profile::RELATION_NAMES {
        document.insert((*name).to_string(), Value::Array(Vec::new()));
    }

    let records = conn
        .query_map(
            "SELECT relation, payload FROM profile_records
             WHERE profile_id = ?1
             ORDER BY relation, seq",
            params![&id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .map_err(map_storage_error)?;

    for (relation, payload) in records {
        let value: Value = serde_json::from_str(&payload).map_err(map_json_error)?;
        if relation == SOCIAL_ACCOUNT {
            document.insert(relation, value);
            continue;
        }
        match document.get_mut(&relation) {
            Some(Value::Array(items)) => items.push(value),
            _ => {
                warn!(profile_id = %id, relation = %relation, "unknown relation in storage");
                return Err(LodgelyError::Database(format!("unknown relation '{relation}'")));
            }
        }
    }

    let mut profile: Profile =
        serde_json::from_value(Value::Object(document)).map_err(map_json_error)?;
    if !profile.owns_all_children() {
        return Err(LodgelyError::Database(format!(
            "profile {id} holds records owned by another profile"
        )));
    }
    profile.apply_presentation_order();

    Ok(Some(profile))
}

/// One owned record ready to be written
struct RecordRow {
    relation: &'static str,
    seq: i64,
    record_id: String,
    payload: String,
}

impl RecordRow {
    fn new(relation: &'static str, seq: i64, item: &Value) -> DomainResult<Self> {
        let record_id = item.get("id").and_then(Value::as_str).ok_or_else(|| {
            LodgelyError::Internal(format!("{relation} record serialized without an id"))
        })?;
        Ok(Self { relation, seq, record_id: record_id.to_string(), payload: item.to_string() })
    }
}

fn write_profile(conn: &mut SqliteConnection, profile: &Profile) -> DomainResult<()> {
    let Value::Object(mut document) = serde_json::to_value(profile).map_err(map_json_error)?
    else {
        return Err(LodgelyError::Internal("profile did not serialize to an object".into()));
    };

    let mut rows = Vec::new();
    for &relation in Profile::RELATION_NAMES.iter().chain(std::iter::once(&SOCIAL_ACCOUNT)) {
        match document.remove(relation) {
            Some(Value::Array(items)) => {
                for (seq, item) in (0_i64..).zip(&items) {
                    rows.push(RecordRow::new(relation, seq, item)?);
                }
            }
            Some(Value::Null) | None => {}
            Some(item) => rows.push(RecordRow::new(relation, 0, &item)?),
        }
    }

    let id = profile.id().to_string();
    let created_at = profile.created_at().map(|at| at.to_rfc3339());
    let updated_at = profile.updated_at().map(|at| at.to_rfc3339());
    let payload = Value::Object(document).to_string();

    let tx = conn.transaction().map_err(map_sql_error)?;
    tx.execute(
        "INSERT INTO profiles (id, email, username, slug, created_at, updated_at, payload)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(id) DO UPDATE SET
            email = excluded.email,
            username = excluded.username,
            slug = excluded.slug,
            created_at = excluded.created_at,
            updated_at = excluded.updated_at,
            payload = excluded.payload",
        params![
            &id,
            profile.email(),
            profile.username(),
            profile.slug(),
            created_at,
            updated_at,
            payload
        ],
    )
    .map_err(map_sql_error)?;

    tx.execute("DELETE FROM profile_records WHERE profile_id = ?1", params![&id])
        .map_err(map_sql_error)?;
    {
        let mut held_elsewhere = tx
            .prepare(
                "SELECT profile_id FROM profile_records
                 WHERE relation = ?1 AND record_id = ?2 AND profile_id <> ?3
                 LIMIT 1",
            )
            .map_err(map_sql_error)?;
        let mut insert = tx
            .prepare(
                "INSERT INTO profile_records (profile_id, relation, seq, record_id, payload)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .map_err(map_sql_error)?;
        for row in &rows {
            let other: Option<String> = held_elsewhere
                .query_row(params![row.relation, &row.record_id, &id], |r| r.get(0))
                .optional()
                .map_err(map_sql_error)?;
            if let Some(other) = other {
                warn!(
                    profile_id = %id,
                    other_profile_id = %other,
                    relation = row.relation,
                    record_id = %row.record_id,
                    "record already owned by another profile"
                );
                return Err(LodgelyError::Conflict(format!(
                    "{} record {} belongs to another profile",
                    row.relation, row.record_id
                )));
            }
            insert
                .execute(params![&id, row.relation, row.seq, &row.record_id, &row.payload])
                .map_err(map_sql_error)?;
        }
    }
    tx.commit().map_err(map_sql_error)?;

    debug!(profile_id = %id, records = rows.len(), "profile saved");
    Ok(())
}

// =============================================================================
// Error Mapping
// =============================================================================

fn map_storage_error(err: StorageError) -> LodgelyError {
    InfraError::from(err).into()
}

fn map_sql_error(err: rusqlite::Error) -> LodgelyError {
    InfraError::from(err).into()
}

fn map_json_error(err: serde_json::Error) -> LodgelyError {
    InfraError::from(err).into()
}

fn map_join_error(err: task::JoinError) -> LodgelyError {
    LodgelyError::Internal(format!("Task join error: {err}"))
}

// =============================================================================
// Tests
// =============================================================================
