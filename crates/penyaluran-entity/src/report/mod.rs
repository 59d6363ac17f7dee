//! Distribution report entities.

pub mod model;
pub mod status;

pub use model::{CreateReport, Report, ReportDetail, UpdateReport};
pub use status::ReportStatus;
