//! # penyaluran-service
//!
//! Business logic for the distribution report service. Each service
//! orchestrates repositories and the proof store to implement one group of
//! use cases.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references.

pub mod dashboard;
pub mod report;


pub use dashboard::{DashboardService, ReportStatistics};
pub use report::{ProofUpload, ReportFields, ReportService, ReviewService};
