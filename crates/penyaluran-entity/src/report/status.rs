//! Report review status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review status of a distribution report.
///
/// The wire and storage values are the Indonesian labels used by the
/// admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportStatus {
    /// Awaiting admin review.
    #[default]
    Pending,
    /// Approved.
    Disetujui,
    /// Rejected.
    Ditolak,
}

impl ReportStatus {
    /// Whether an admin may still approve or reject the report.
    pub fn is_reviewable(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Return the status as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Disetujui => "Disetujui",
            Self::Ditolak => "Ditolak",
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = penyaluran_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Pending" => Ok(Self::Pending),
            "Disetujui" => Ok(Self::Disetujui),
            "Ditolak" => Ok(Self::Ditolak),
            _ => Err(penyaluran_core::AppError::validation(format!(
                "Status tidak valid: '{s}'. Gunakan salah satu dari: Pending, Disetujui, Ditolak"
            ))),
        }
    }
}

impl TryFrom<String> for ReportStatus {
    type Error = penyaluran_core::AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
