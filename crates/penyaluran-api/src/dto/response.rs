//! Response DTOs.

use serde::{Deserialize, Serialize};

/// A plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` when every dependency is reachable, `degraded` otherwise.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Database status.
    pub database: String,
    /// Upload directory status.
    pub storage: String,
}
