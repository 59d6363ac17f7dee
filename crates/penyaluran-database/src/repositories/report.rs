//! Report repository implementation.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use penyaluran_core::error::{AppError, ErrorKind};
use penyaluran_core::result::AppResult;
use penyaluran_entity::report::{CreateReport, Report, ReportDetail};

const DETAIL_SELECT: &str = "SELECT r.*, p.name AS program_name \
     FROM reports r INNER JOIN programs p ON p.id = r.program_id";

/// Repository for report CRUD and joined listing queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List reports joined with their program, optionally restricted to one region.
    pub async fn find_all(&self, region: Option<&str>) -> AppResult<Vec<ReportDetail>> {
        let result = match region {
            Some(region) => {
                sqlx::query_as::<_, ReportDetail>(&format!(
                    "{DETAIL_SELECT} WHERE r.region = ? ORDER BY r.id ASC"
                ))
                .bind(region)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, ReportDetail>(&format!("{DETAIL_SELECT} ORDER BY r.id ASC"))
                    .fetch_all(&self.pool)
                    .await
            }
        };

        result.map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reports", e))
    }

    /// Find a report by ID.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    /// Find a report by ID, joined with its program.
    pub async fn find_detail_by_id(&self, id: i64) -> AppResult<Option<ReportDetail>> {
        sqlx::query_as::<_, ReportDetail>(&format!("{DETAIL_SELECT} WHERE r.id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find report", e))
    }

    /// Create a new report with status `Pending`.
    pub async fn create(&self, data: &CreateReport) -> AppResult<Report> {
        let now = Utc::now();
        let report = sqlx::query_as::<_, Report>(
            "INSERT INTO reports \
             (program_id, recipient_count, region, distribution_date, proof, note, status, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, 'Pending', ?, ?) RETURNING *",
        )
        .bind(data.program_id)
        .bind(data.recipient_count)
        .bind(&data.region)
        .bind(data.distribution_date)
        .bind(&data.proof)
        .bind(&data.note)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to create report"))?;

        debug!(report_id = report.id, "Inserted report row");
        Ok(report)
    }

    /// Persist every mutable field of an existing report.
    pub async fn update(&self, report: &Report) -> AppResult<Report> {
        sqlx::query_as::<_, Report>(
            "UPDATE reports SET program_id = ?, recipient_count = ?, region = ?, \
             distribution_date = ?, note = ?, status = ?, updated_at = ? \
             WHERE id = ? RETURNING *",
        )
        .bind(report.program_id)
        .bind(report.recipient_count)
        .bind(&report.region)
        .bind(report.distribution_date)
        .bind(&report.note)
        .bind(report.status.as_str())
        .bind(Utc::now())
        .bind(report.id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_write_error(e, "Failed to update report"))?
        .ok_or_else(|| AppError::not_found("Laporan tidak ditemukan"))
    }

    /// Delete a report. Returns `true` if a row was removed.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete report", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Translate constraint violations into validation errors.
fn map_write_error(e: sqlx::Error, context: &str) -> AppError {
    match e {
        sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
            AppError::validation("Program tidak ditemukan")
        }
        sqlx::Error::Database(ref db_err) if db_err.is_check_violation() => {
            AppError::validation(format!("Data laporan tidak valid: {}", db_err.message()))
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), e),
    }
}
