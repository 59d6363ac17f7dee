//! Admin review: approving and rejecting pending reports.

use std::sync::Arc;

use tracing::info;

use penyaluran_core::error::AppError;
use penyaluran_core::result::AppResult;
use penyaluran_database::repositories::ReportRepository;
use penyaluran_entity::report::{Report, ReportStatus};

use super::service::REPORT_NOT_FOUND;

/// Applies review decisions to pending reports.
#[derive(Debug, Clone)]
pub struct ReviewService {
    report_repo: Arc<ReportRepository>,
}

impl ReviewService {
    /// Creates a new review service.
    pub fn new(report_repo: Arc<ReportRepository>) -> Self {
        Self { report_repo }
    }

    /// Approve a pending report.
    pub async fn approve(&self, id: i64) -> AppResult<Report> {
        self.decide(id, ReportStatus::Disetujui, None).await
    }

    /// Reject a pending report, recording the reason as its note.
    pub async fn reject(&self, id: i64, reason: &str) -> AppResult<Report> {
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::validation("Alasan penolakan wajib diisi"));
        }
        self.decide(id, ReportStatus::Ditolak, Some(reason.to_string()))
            .await
    }

    async fn decide(
        &self,
        id: i64,
        decision: ReportStatus,
        note: Option<String>,
    ) -> AppResult<Report> {
        let mut report = self
            .report_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(REPORT_NOT_FOUND))?;

        if !report.status.is_reviewable() {
            return Err(AppError::validation(format!(
                "Laporan sudah ditinjau dengan status {}",
                report.status
            )));
        }

        report.status = decision;
        if note.is_some() {
            report.note = note;
        }
        let report = self.report_repo.update(&report).await?;

        info!(report_id = id, status = %report.status, "Report reviewed");
        Ok(report)
    }
}
