//! Core traits defined in `penyaluran-core` and implemented by other crates.

pub mod storage;

pub use storage::{StoredObject, StorageProvider};
