//! Route definitions for the distribution report HTTP API.
//!
//! API routes are organized by domain and mounted under `/api`; stored
//! proofs are served as static files under the configured public path.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::state::AppState;

/// Room for the text fields and multipart framing around the proof file.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let storage = &state.config.storage;
    let body_limit = storage.max_upload_size_bytes as usize + FORM_OVERHEAD_BYTES;
    let uploads = ServeDir::new(&storage.upload_dir);
    let public_path = match storage.public_path.trim_end_matches('/') {
        "" => "/uploads".to_string(),
        path => path.to_string(),
    };

    let api_routes = Router::new()
        .merge(report_routes())
        .merge(review_routes())
        .merge(dashboard_routes())
        .merge(program_routes())
        .merge(health_routes())
        .method_not_allowed_fallback(handlers::fallback::method_not_allowed);

    Router::new()
        .nest("/api", api_routes)
        .nest_service(&public_path, uploads)
        .fallback(handlers::fallback::not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Report CRUD
fn report_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports",
            get(handlers::report::list_reports).post(handlers::report::create_report),
        )
        .route(
            "/reports/{id}",
            get(handlers::report::get_report)
                .put(handlers::report::update_report)
                .delete(handlers::report::delete_report),
        )
}

/// Approve / reject
fn review_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/reports/{id}/approve",
            post(handlers::review::approve_report),
        )
        .route("/reports/{id}/reject", post(handlers::review::reject_report))
}

/// Dashboard view model and statistics
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(handlers::dashboard::overview))
        .route("/dashboard/statistics", get(handlers::dashboard::statistics))
}

/// Reference data
fn program_routes() -> Router<AppState> {
    Router::new().route("/programs", get(handlers::program::list_programs))
}

/// Health check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
