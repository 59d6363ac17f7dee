//! Custom Axum extractors.

pub mod form;
pub mod path;

pub use form::ReportForm;
pub use path::ReportId;
