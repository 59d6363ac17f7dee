//! Program repository implementation.

use sqlx::SqlitePool;

use penyaluran_core::error::{AppError, ErrorKind};
use penyaluran_core::result::AppResult;
use penyaluran_entity::program::Program;

/// Repository for program reference data.
#[derive(Debug, Clone)]
pub struct ProgramRepository {
    pool: SqlitePool,
}

impl ProgramRepository {
    /// Create a new program repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all programs ordered by ID.
    pub async fn find_all(&self) -> AppResult<Vec<Program>> {
        sqlx::query_as::<_, Program>("SELECT id, name FROM programs ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list programs", e))
    }

    /// Find a program by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Program>> {
        sqlx::query_as::<_, Program>("SELECT id, name FROM programs WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find program", e))
    }

    /// Find a program by its unique name.
    pub async fn find_by_name(&self, name: &str) -> AppResult<Option<Program>> {
        sqlx::query_as::<_, Program>("SELECT id, name FROM programs WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find program by name", e)
            })
    }
}
