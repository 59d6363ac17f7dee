//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use penyaluran_core::config::AppConfig;
use penyaluran_core::result::AppResult;
use penyaluran_database::DatabasePool;
use penyaluran_database::repositories::{ProgramRepository, ReportRepository};
use penyaluran_service::{DashboardService, ReportService, ReviewService};
use penyaluran_storage::{LocalStorageProvider, ProofStore};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,
    /// Proof file store
    pub proofs: Arc<ProofStore>,

    // ── Services ─────────────────────────────────────────────
    /// Report CRUD service
    pub report_service: Arc<ReportService>,
    /// Approve/reject service
    pub review_service: Arc<ReviewService>,
    /// Dashboard view model service
    pub dashboard_service: Arc<DashboardService>,
}

impl AppState {
    /// Wire storage, repositories, and services on top of a connected pool.
    pub async fn build(config: AppConfig, db: DatabasePool) -> AppResult<Self> {
        let provider = LocalStorageProvider::new(&config.storage.upload_dir).await?;
        let proofs = Arc::new(ProofStore::new(Arc::new(provider), &config.storage));

        let report_repo = Arc::new(ReportRepository::new(db.pool().clone()));
        let program_repo = Arc::new(ProgramRepository::new(db.pool().clone()));

        let report_service = Arc::new(ReportService::new(
            Arc::clone(&report_repo),
            Arc::clone(&program_repo),
            Arc::clone(&proofs),
        ));
        let review_service = Arc::new(ReviewService::new(Arc::clone(&report_repo)));
        let dashboard_service = Arc::new(DashboardService::new(Arc::clone(&report_repo)));

        Ok(Self {
            config: Arc::new(config),
            db,
            proofs,
            report_service,
            review_service,
            dashboard_service,
        })
    }
}
