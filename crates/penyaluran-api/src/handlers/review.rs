//! Admin review handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use validator::Validate;

use penyaluran_core::error::AppError;
use penyaluran_entity::report::Report;

use crate::dto::request::RejectReportRequest;
use crate::error::ApiResult;
use crate::extractors::ReportId;
use crate::state::AppState;

/// POST /api/reports/{id}/approve
pub async fn approve_report(
    State(state): State<AppState>,
    ReportId(id): ReportId,
) -> ApiResult<Json<Report>> {
    let report = state.review_service.approve(id).await?;
    Ok(Json(report))
}

/// POST /api/reports/{id}/reject
pub async fn reject_report(
    State(state): State<AppState>,
    ReportId(id): ReportId,
    body: Result<Json<RejectReportRequest>, JsonRejection>,
) -> ApiResult<Json<Report>> {
    let Json(req) =
        body.map_err(|e| AppError::validation(format!("JSON tidak valid: {}", e.body_text())))?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let report = state.review_service.reject(id, &req.reason).await?;
    Ok(Json(report))
}
