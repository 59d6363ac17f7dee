//! # penyaluran-entity
//!
//! Domain entity models for the distribution report service. Every struct
//! in this crate represents a database table row or a domain value object.
//! Database entities derive `sqlx::FromRow`; JSON uses camelCase keys.

pub mod program;
pub mod report;
