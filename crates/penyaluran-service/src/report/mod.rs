//! Report intake, editing, and review.

pub mod input;
pub mod review;
pub mod service;

pub use input::{ProofUpload, ReportFields};
pub use review::ReviewService;
pub use service::ReportService;
