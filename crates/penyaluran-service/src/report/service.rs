//! Report CRUD operations.

use std::sync::Arc;

use tracing::{info, warn};

use penyaluran_core::error::AppError;
use penyaluran_core::result::AppResult;
use penyaluran_database::repositories::{ProgramRepository, ReportRepository};
use penyaluran_entity::program::Program;
use penyaluran_entity::report::{CreateReport, Report, ReportDetail};
use penyaluran_storage::ProofStore;
use penyaluran_storage::proof::INVALID_PROOF_MESSAGE;

use super::input::{ProofUpload, ReportFields};

/// Message returned when a report ID does not exist.
pub const REPORT_NOT_FOUND: &str = "Laporan tidak ditemukan";

/// Manages report intake, editing, and removal.
#[derive(Debug, Clone)]
pub struct ReportService {
    /// Report repository.
    report_repo: Arc<ReportRepository>,
    /// Program repository.
    program_repo: Arc<ProgramRepository>,
    /// Proof file store.
    proofs: Arc<ProofStore>,
}

impl ReportService {
    /// Creates a new report service.
    pub fn new(
        report_repo: Arc<ReportRepository>,
        program_repo: Arc<ProgramRepository>,
        proofs: Arc<ProofStore>,
    ) -> Self {
        Self {
            report_repo,
            program_repo,
            proofs,
        }
    }

    /// Lists reports with their programs. A blank region means no filter.
    pub async fn list_reports(&self, region: Option<&str>) -> AppResult<Vec<ReportDetail>> {
        let region = region.map(str::trim).filter(|r| !r.is_empty());
        self.report_repo.find_all(region).await
    }

    /// Gets one report with its program.
    pub async fn get_report(&self, id: i64) -> AppResult<ReportDetail> {
        self.report_repo
            .find_detail_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(REPORT_NOT_FOUND))
    }

    /// Creates a report from submitted fields and a proof file.
    ///
    /// Everything is validated before the file is written. If the insert
    /// fails afterwards, the stored file is removed again.
    pub async fn create_report(
        &self,
        fields: ReportFields,
        proof: Option<ProofUpload>,
    ) -> AppResult<Report> {
        let proof = proof.ok_or_else(|| AppError::validation(INVALID_PROOF_MESSAGE))?;
        self.proofs.check(&proof.data)?;

        let valid = fields.validate_new()?;
        self.require_program(valid.program_id).await?;

        let stored = self
            .proofs
            .store(proof.file_name.as_deref(), proof.data)
            .await?;

        let data = CreateReport {
            program_id: valid.program_id,
            recipient_count: valid.recipient_count,
            region: valid.region,
            distribution_date: valid.distribution_date,
            proof: stored.public_path.clone(),
            note: valid.note,
        };

        match self.report_repo.create(&data).await {
            Ok(report) => {
                info!(
                    report_id = report.id,
                    program_id = report.program_id,
                    region = %report.region,
                    recipients = report.recipient_count,
                    "Report created"
                );
                Ok(report)
            }
            Err(e) => {
                if let Err(cleanup) = self.proofs.remove(&stored.public_path).await {
                    warn!(error = %cleanup, path = %stored.public_path, "Failed to remove orphaned proof");
                }
                Err(e)
            }
        }
    }

    /// Partially updates a report. Fields not provided keep their values.
    pub async fn update_report(&self, id: i64, fields: ReportFields) -> AppResult<Report> {
        let mut report = self
            .report_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(REPORT_NOT_FOUND))?;

        let update = fields.to_update()?;

        if let Some(program_id) = update.program_id {
            self.require_program(program_id).await?;
        }

        if update.is_empty() {
            return Ok(report);
        }

        let previous_status = report.status;
        report.apply(update);
        let report = self.report_repo.update(&report).await?;

        info!(
            report_id = report.id,
            from = %previous_status,
            to = %report.status,
            "Report updated"
        );
        Ok(report)
    }

    /// Deletes a report and, best-effort, its proof file.
    pub async fn delete_report(&self, id: i64) -> AppResult<()> {
        let report = self
            .report_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(REPORT_NOT_FOUND))?;

        if !self.report_repo.delete(id).await? {
            return Err(AppError::not_found(REPORT_NOT_FOUND));
        }

        if let Err(e) = self.proofs.remove(&report.proof).await {
            warn!(report_id = id, error = %e, "Failed to remove proof file");
        }

        info!(report_id = id, "Report deleted");
        Ok(())
    }

    /// Lists the programs a report can belong to.
    pub async fn list_programs(&self) -> AppResult<Vec<Program>> {
        self.program_repo.find_all().await
    }

    async fn require_program(&self, program_id: i64) -> AppResult<()> {
        match self.program_repo.find_by_id(program_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::validation("Program tidak ditemukan")),
        }
    }
}
