//! Health check handler.

use axum::Json;
use axum::extract::State;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = match state.db.health_check().await {
        Ok(true) => "connected",
        Ok(false) => "unavailable",
        Err(e) => {
            warn!(error = %e, "Database health check failed");
            "unavailable"
        }
    };
    let storage = match state.proofs.health_check().await {
        Ok(true) => "available",
        _ => "unavailable",
    };

    let status = if database == "connected" && storage == "available" {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        storage: storage.to_string(),
    })
}
