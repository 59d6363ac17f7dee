//! Report entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use crate::program::Program;

use super::status::ReportStatus;

/// A record of one distribution event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Unique report identifier.
    pub id: i64,
    /// The program this distribution belongs to.
    pub program_id: i64,
    /// Number of recipients reached.
    pub recipient_count: i64,
    /// Region where the distribution took place.
    pub region: String,
    /// When the distribution took place.
    pub distribution_date: DateTime<Utc>,
    /// Public path of the uploaded proof file.
    pub proof: String,
    /// Free-text note; holds the rejection reason once rejected.
    pub note: Option<String>,
    /// Review status.
    #[sqlx(try_from = "String")]
    pub status: ReportStatus,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// When the report was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Report {
    /// Merge a partial update into this report.
    ///
    /// Fields absent from the update keep their current values.
    pub fn apply(&mut self, update: UpdateReport) {
        if let Some(program_id) = update.program_id {
            self.program_id = program_id;
        }
        if let Some(recipient_count) = update.recipient_count {
            self.recipient_count = recipient_count;
        }
        if let Some(region) = update.region {
            self.region = region;
        }
        if let Some(distribution_date) = update.distribution_date {
            self.distribution_date = distribution_date;
        }
        if let Some(note) = update.note {
            self.note = Some(note);
        }
        if let Some(status) = update.status {
            self.status = status;
        }
    }
}

/// A report joined with its program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportDetail {
    /// The report row.
    #[serde(flatten)]
    pub report: Report,
    /// The referenced program.
    pub program: Program,
}

impl<'r> FromRow<'r, SqliteRow> for ReportDetail {
    /// Expects the report columns plus a `program_name` column.
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let report = Report::from_row(row)?;
        let program = Program {
            id: report.program_id,
            name: row.try_get("program_name")?,
        };
        Ok(Self { report, program })
    }
}

/// Data required to create a new report record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateReport {
    /// Program ID.
    pub program_id: i64,
    /// Number of recipients.
    pub recipient_count: i64,
    /// Region name.
    pub region: String,
    /// Distribution date.
    pub distribution_date: DateTime<Utc>,
    /// Public path of the stored proof file.
    pub proof: String,
    /// Optional note.
    pub note: Option<String>,
}

/// A partial update to an existing report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateReport {
    /// New program ID.
    pub program_id: Option<i64>,
    /// New recipient count.
    pub recipient_count: Option<i64>,
    /// New region.
    pub region: Option<String>,
    /// New distribution date.
    pub distribution_date: Option<DateTime<Utc>>,
    /// New note.
    pub note: Option<String>,
    /// New review status.
    pub status: Option<ReportStatus>,
}

impl UpdateReport {
    /// Whether the update changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
