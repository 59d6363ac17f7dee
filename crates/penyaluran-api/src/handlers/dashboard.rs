//! Admin dashboard handlers.

use axum::Json;
use axum::extract::State;

use penyaluran_service::ReportStatistics;
use penyaluran_service::dashboard::DashboardView;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/dashboard
pub async fn overview(State(state): State<AppState>) -> ApiResult<Json<DashboardView>> {
    let view = state.dashboard_service.overview().await?;
    Ok(Json(view))
}

/// GET /api/dashboard/statistics
pub async fn statistics(State(state): State<AppState>) -> ApiResult<Json<ReportStatistics>> {
    let stats = state.dashboard_service.statistics().await?;
    Ok(Json(stats))
}
