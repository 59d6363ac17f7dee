//! # penyaluran-storage
//!
//! Storage for uploaded proof files. The local filesystem provider writes
//! into the configured uploads directory, and [`ProofStore`] assigns unique
//! file names and public paths on top of it.

pub mod proof;
pub mod providers;

pub use proof::ProofStore;
pub use providers::LocalStorageProvider;
