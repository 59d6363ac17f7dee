//! Repository implementations for programs and reports.

pub mod program;
pub mod report;

pub use program::ProgramRepository;
pub use report::ReportRepository;
