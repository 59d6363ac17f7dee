//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query parameters for `GET /api/reports`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegionQuery {
    /// Exact region to filter by.
    pub region: Option<String>,
}

/// Body of `POST /api/reports/{id}/reject`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RejectReportRequest {
    /// Why the report was rejected.
    #[serde(default)]
    #[validate(length(min = 1, max = 1000, message = "Alasan penolakan wajib diisi"))]
    pub reason: String,
}
