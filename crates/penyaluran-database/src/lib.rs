//! # penyaluran-database
//!
//! SQLite connection management, migrations, reference-data seeding, and
//! the repositories backing the report store.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

#[cfg(test)]
pub(crate) mod testing;

pub use connection::DatabasePool;
