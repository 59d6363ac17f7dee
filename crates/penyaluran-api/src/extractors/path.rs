//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use penyaluran_core::error::AppError;

use crate::error::ApiError;

/// A report ID taken from the `{id}` path segment.
///
/// Malformed segments are rejected as validation errors with a JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportId(pub i64);

impl<S> FromRequestParts<S> for ReportId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(format!("Path tidak valid: {}", e.body_text())))?;
        Ok(Self(parse_id(&raw)?))
    }
}

/// Parses a numeric report ID from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation(format!("ID laporan tidak valid: '{s}'")))
}
