//! Aggregate report statistics.

use std::collections::BTreeMap;

use serde::Serialize;

use penyaluran_entity::report::ReportDetail;

/// Totals shown in the dashboard charts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatistics {
    /// Number of reports.
    pub total_reports: u64,
    /// Recipients summed per program name.
    pub recipient_per_program: BTreeMap<String, i64>,
    /// Recipients summed per region.
    pub distribution_per_region: BTreeMap<String, i64>,
}

impl ReportStatistics {
    /// Aggregate over every report, regardless of status.
    ///
    /// Sums saturate at `i64::MAX`.
    pub fn from_reports(reports: &[ReportDetail]) -> Self {
        let mut stats = Self {
            total_reports: reports.len() as u64,
            ..Default::default()
        };
        for detail in reports {
            let recipients = detail.report.recipient_count;
            let per_program = stats
                .recipient_per_program
                .entry(detail.program.name.clone())
                .or_default();
            *per_program = per_program.saturating_add(recipients);
            let per_region = stats
                .distribution_per_region
                .entry(detail.report.region.clone())
                .or_default();
            *per_region = per_region.saturating_add(recipients);
        }
        stats
    }
}
