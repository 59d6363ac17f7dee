//! # penyaluran-core
//!
//! Core crate for the distribution report service. Contains configuration
//! schemas, the storage provider trait, and the unified error system.
//!
//! This crate has **no** internal dependencies on other workspace crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
