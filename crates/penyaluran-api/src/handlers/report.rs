//! Report CRUD handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use penyaluran_core::error::AppError;
use penyaluran_entity::report::{Report, ReportDetail};

use crate::dto::request::RegionQuery;
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::{ReportForm, ReportId};
use crate::state::AppState;

/// GET /api/reports?region=...
pub async fn list_reports(
    State(state): State<AppState>,
    query: Result<Query<RegionQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<ReportDetail>>> {
    let Query(query) = query
        .map_err(|e| AppError::validation(format!("Query tidak valid: {}", e.body_text())))?;
    let reports = state
        .report_service
        .list_reports(query.region.as_deref())
        .await?;
    Ok(Json(reports))
}

/// GET /api/reports/{id}
pub async fn get_report(
    State(state): State<AppState>,
    ReportId(id): ReportId,
) -> ApiResult<Json<ReportDetail>> {
    let report = state.report_service.get_report(id).await?;
    Ok(Json(report))
}

/// POST /api/reports (multipart with a `proof` file)
pub async fn create_report(
    State(state): State<AppState>,
    form: ReportForm,
) -> ApiResult<(StatusCode, Json<Report>)> {
    let report = state
        .report_service
        .create_report(form.fields, form.proof)
        .await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// PUT /api/reports/{id}
pub async fn update_report(
    State(state): State<AppState>,
    ReportId(id): ReportId,
    form: ReportForm,
) -> ApiResult<Json<Report>> {
    let report = state.report_service.update_report(id, form.fields).await?;
    Ok(Json(report))
}

/// DELETE /api/reports/{id}
pub async fn delete_report(
    State(state): State<AppState>,
    ReportId(id): ReportId,
) -> ApiResult<Json<MessageResponse>> {
    state.report_service.delete_report(id).await?;
    Ok(Json(MessageResponse::new("Laporan berhasil dihapus")))
}
