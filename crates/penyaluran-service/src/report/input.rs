//! Raw report form input and its conversion into typed entity data.
//!
//! Fields arrive as text from multipart forms, URL-encoded forms, or JSON.
//! A field that is absent or blank counts as not provided.

use bytes::Bytes;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use penyaluran_core::error::AppError;
use penyaluran_core::result::AppResult;
use penyaluran_entity::report::{ReportStatus, UpdateReport};

/// Message returned when a required field is missing on create.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Semua field wajib diisi";

/// Report fields as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFields {
    pub program_id: Option<String>,
    pub recipient_count: Option<String>,
    pub region: Option<String>,
    pub distribution_date: Option<String>,
    pub note: Option<String>,
    pub status: Option<String>,
}

/// An uploaded proof file.
#[derive(Debug, Clone)]
pub struct ProofUpload {
    /// The client-supplied file name, if any.
    pub file_name: Option<String>,
    /// File content.
    pub data: Bytes,
}

/// Validated fields for a new report, before the proof is stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedReport {
    pub program_id: i64,
    pub recipient_count: i64,
    pub region: String,
    pub distribution_date: DateTime<Utc>,
    pub note: Option<String>,
}

impl ReportFields {
    /// Set a field by its form name. Unknown names are ignored.
    ///
    /// Returns `true` if the name was recognised.
    pub fn set(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "programId" | "program_id" => &mut self.program_id,
            "recipientCount" | "recipient_count" => &mut self.recipient_count,
            "region" => &mut self.region,
            "distributionDate" | "distribution_date" => &mut self.distribution_date,
            "note" => &mut self.note,
            "status" => &mut self.status,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Validate the fields required to create a report.
    ///
    /// `status` is ignored: new reports always start as `Pending`.
    pub fn validate_new(&self) -> AppResult<ValidatedReport> {
        let (Some(program_id), Some(recipient_count), Some(region), Some(distribution_date)) = (
            provided(&self.program_id),
            provided(&self.recipient_count),
            provided(&self.region),
            provided(&self.distribution_date),
        ) else {
            return Err(AppError::validation(REQUIRED_FIELDS_MESSAGE));
        };

        Ok(ValidatedReport {
            program_id: parse_program_id(program_id)?,
            recipient_count: parse_recipient_count(recipient_count)?,
            region: region.to_string(),
            distribution_date: parse_distribution_date(distribution_date)?,
            note: provided(&self.note).map(str::to_string),
        })
    }

    /// Convert the provided fields into a partial update.
    pub fn to_update(&self) -> AppResult<UpdateReport> {
        Ok(UpdateReport {
            program_id: provided(&self.program_id)
                .map(parse_program_id)
                .transpose()?,
            recipient_count: provided(&self.recipient_count)
                .map(parse_recipient_count)
                .transpose()?,
            region: provided(&self.region).map(str::to_string),
            distribution_date: provided(&self.distribution_date)
                .map(parse_distribution_date)
                .transpose()?,
            note: provided(&self.note).map(str::to_string),
            status: provided(&self.status)
                .map(str::parse::<ReportStatus>)
                .transpose()?,
        })
    }
}

fn provided(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn parse_program_id(value: &str) -> AppResult<i64> {
    value
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| AppError::validation(format!("programId tidak valid: '{value}'")))
}

fn parse_recipient_count(value: &str) -> AppResult<i64> {
    value
        .parse::<u32>()
        .map(i64::from)
        .map_err(|_| {
            AppError::validation(format!(
                "Jumlah penerima harus berupa bilangan bulat tidak negatif: '{value}'"
            ))
        })
}

/// Parse RFC 3339 timestamps, local date-times, or plain dates (midnight UTC).
pub fn parse_distribution_date(value: &str) -> AppResult<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AppError::validation(format!("Tanggal penyaluran tidak valid: '{value}'")))
}
