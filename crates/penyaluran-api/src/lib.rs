//! # penyaluran-api
//!
//! HTTP API layer for the distribution report service built on Axum.
//!
//! Provides the report, review, dashboard, and reference-data endpoints,
//! static serving of uploaded proofs, middleware (CORS, logging), extractors,
//! DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
