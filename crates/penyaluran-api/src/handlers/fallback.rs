//! Fallbacks for unknown paths and unsupported methods.

use penyaluran_core::error::AppError;

use crate::error::ApiError;

/// Any path without a route.
pub async fn not_found() -> ApiError {
    AppError::not_found("Endpoint tidak ditemukan").into()
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    AppError::method_not_allowed("Metode tidak diizinkan").into()
}
