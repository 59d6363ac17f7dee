//! Admin dashboard view model and aggregate statistics.

pub mod service;
pub mod statistics;

pub use service::{DashboardRow, DashboardService, DashboardView, ReviewAction};
pub use statistics::ReportStatistics;
