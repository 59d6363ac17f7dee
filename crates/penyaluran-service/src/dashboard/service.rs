//! Dashboard view model assembly.

use std::sync::Arc;

use serde::Serialize;

use penyaluran_core::result::AppResult;
use penyaluran_database::repositories::ReportRepository;
use penyaluran_entity::report::ReportDetail;

use super::statistics::ReportStatistics;

/// A review action available on a dashboard row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    Approve,
    Reject,
}

/// One row of the dashboard review table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardRow {
    #[serde(flatten)]
    pub detail: ReportDetail,
    /// Empty once the report has been reviewed.
    pub actions: Vec<ReviewAction>,
}

impl From<ReportDetail> for DashboardRow {
    fn from(detail: ReportDetail) -> Self {
        let actions = if detail.report.status.is_reviewable() {
            vec![ReviewAction::Approve, ReviewAction::Reject]
        } else {
            Vec::new()
        };
        Self { detail, actions }
    }
}

/// Everything the admin dashboard renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub statistics: ReportStatistics,
    pub reports: Vec<DashboardRow>,
}

/// Builds dashboard data from the report store.
#[derive(Debug, Clone)]
pub struct DashboardService {
    report_repo: Arc<ReportRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(report_repo: Arc<ReportRepository>) -> Self {
        Self { report_repo }
    }

    /// Statistics plus the review table rows.
    pub async fn overview(&self) -> AppResult<DashboardView> {
        let reports = self.report_repo.find_all(None).await?;
        Ok(DashboardView {
            statistics: ReportStatistics::from_reports(&reports),
            reports: reports.into_iter().map(DashboardRow::from).collect(),
        })
    }

    /// Statistics only.
    pub async fn statistics(&self) -> AppResult<ReportStatistics> {
        let reports = self.report_repo.find_all(None).await?;
        Ok(ReportStatistics::from_reports(&reports))
    }
}
