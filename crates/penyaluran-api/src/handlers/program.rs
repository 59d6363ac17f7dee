//! Program reference data handlers.

use axum::Json;
use axum::extract::State;

use penyaluran_entity::program::Program;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/programs
pub async fn list_programs(State(state): State<AppState>) -> ApiResult<Json<Vec<Program>>> {
    let programs = state.report_service.list_programs().await?;
    Ok(Json(programs))
}
