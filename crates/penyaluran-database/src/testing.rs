//! Temporary database fixture for repository tests.

use sqlx::SqlitePool;
use tempfile::TempDir;

use penyaluran_core::config::DatabaseConfig;

use crate::connection::DatabasePool;
use crate::migration::run_migrations;

/// A migrated SQLite database living in a temporary directory.
pub struct TestDatabase {
    db: DatabasePool,
    _dir: TempDir,
}

impl TestDatabase {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = DatabaseConfig {
            url: format!("sqlite://{}", dir.path().join("test.db").display()),
            ..Default::default()
        };
        let db = DatabasePool::connect(&config)
            .await
            .expect("Failed to connect to test database");
        run_migrations(db.pool())
            .await
            .expect("Failed to run migrations");
        Self { db, _dir: dir }
    }

    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }
}
