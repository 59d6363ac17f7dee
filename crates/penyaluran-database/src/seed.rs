//! Reference data seeding.

use sqlx::SqlitePool;
use tracing::info;

use penyaluran_core::error::{AppError, ErrorKind};
use penyaluran_entity::program::DEFAULT_PROGRAMS;

/// Insert the default programs, skipping names that already exist.
///
/// Returns the number of programs inserted.
pub async fn seed_programs(pool: &SqlitePool) -> Result<u64, AppError> {
    let mut inserted = 0;
    for name in DEFAULT_PROGRAMS {
        let result = sqlx::query("INSERT OR IGNORE INTO programs (name) VALUES (?)")
            .bind(name)
            .execute(pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to seed programs", e))?;
        inserted += result.rows_affected();
    }

    info!(inserted, "Program seed complete");
    Ok(inserted)
}
