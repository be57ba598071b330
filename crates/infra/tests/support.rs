use std::sync::Arc;

use chrono::NaiveDate;
use lodgely_domain::Profile;
use lodgely_infra::database::DbManager;
use tempfile::TempDir;

/// Temporary database wrapper that keeps the underlying file alive for the
/// duration of a test run.
pub struct TestDatabase {
    pub manager: Arc<DbManager>,
    _temp_dir: TempDir,
}

impl TestDatabase {
    /// Create a new migrated temporary database.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir should be created");
        let db_path = temp_dir.path().join("test.db");

        let manager = DbManager::new(&db_path, 4).expect("db manager should be created");
        manager.run_migrations().expect("migrations should run");

        Self { manager: Arc::new(manager), _temp_dir: temp_dir }
    }

    /// Count rows of a table.
    pub fn count(&self, table: &str) -> i64 {
        let conn = self.manager.get_connection().expect("connection should be available");
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), &[], |row| row.get(0))
            .expect("count query should succeed")
    }
}

/// A profile that passes the registration rules.
pub fn registrable_profile(first_name: &str, email: &str) -> Profile {
    let mut profile = Profile::new();
    profile
        .set_email(Some(email))
        .set_first_name(first_name)
        .set_last_name("Bernard")
        .set_birthday(NaiveDate::from_ymd_opt(1985, 2, 20));
    profile
}
