//! Storage provider trait for pluggable proof file backends.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// A file that has been written to a storage provider.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StoredObject {
    /// Name of the file within the storage root.
    pub file_name: String,
    /// Public URL path under which the file is served.
    pub public_path: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

/// Trait for file storage backends.
///
/// Paths are relative to the provider root. The local filesystem
/// implementation lives in `penyaluran-storage`.
#[async_trait]
pub trait StorageProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "local").
    fn provider_type(&self) -> &str;

    /// Check whether the provider is healthy and reachable.
    async fn health_check(&self) -> AppResult<bool>;

    /// Write bytes to a file at the given path.
    async fn write(&self, path: &str, data: Bytes) -> AppResult<()>;

    /// Delete a file. Deleting a missing file is not an error.
    async fn delete(&self, path: &str) -> AppResult<()>;

    /// Check whether a file exists at the given path.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
