//! Route handlers organized by domain.

pub mod dashboard;
pub mod fallback;
pub mod health;
pub mod program;
pub mod report;
pub mod review;
