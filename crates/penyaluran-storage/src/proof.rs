//! Proof file store: unique naming and public paths for uploaded evidence.

use std::sync::Arc;

use bytes::Bytes;
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use penyaluran_core::config::StorageConfig;
use penyaluran_core::error::AppError;
use penyaluran_core::result::AppResult;
use penyaluran_core::traits::storage::{StorageProvider, StoredObject};

/// Message returned when the proof file is missing or unusable.
pub const INVALID_PROOF_MESSAGE: &str = "File bukti tidak ditemukan atau tidak valid";

/// Writes and removes proof files on a storage provider.
#[derive(Debug, Clone)]
pub struct ProofStore {
    provider: Arc<dyn StorageProvider>,
    public_path: String,
    max_size_bytes: u64,
}

impl ProofStore {
    /// Create a proof store on top of a provider.
    pub fn new(provider: Arc<dyn StorageProvider>, config: &StorageConfig) -> Self {
        debug!(
            provider = provider.provider_type(),
            public_path = %config.public_path,
            max_size_bytes = config.max_upload_size_bytes,
            "Proof store configured"
        );
        Self {
            provider,
            public_path: config.public_path.trim_end_matches('/').to_string(),
            max_size_bytes: config.max_upload_size_bytes,
        }
    }

    /// Check that an upload is acceptable without writing it.
    pub fn check(&self, data: &Bytes) -> AppResult<()> {
        if data.is_empty() {
            return Err(AppError::validation(INVALID_PROOF_MESSAGE));
        }
        if data.len() as u64 > self.max_size_bytes {
            return Err(AppError::validation(format!(
                "Ukuran file melebihi batas {} byte",
                self.max_size_bytes
            )));
        }
        Ok(())
    }

    /// Store an uploaded file under a unique name.
    pub async fn store(&self, original_name: Option<&str>, data: Bytes) -> AppResult<StoredObject> {
        self.check(&data)?;

        let file_name = unique_file_name(original_name);
        let size_bytes = data.len() as u64;
        self.provider.write(&file_name, data).await?;

        info!(file = %file_name, size_bytes, "Stored proof file");
        Ok(StoredObject {
            public_path: format!("{}/{}", self.public_path, file_name),
            file_name,
            size_bytes,
        })
    }

    /// Remove a stored proof by its public path.
    ///
    /// Paths outside the public prefix are ignored.
    pub async fn remove(&self, public_path: &str) -> AppResult<()> {
        let Some(file_name) = self.file_name_of(public_path) else {
            warn!(path = public_path, "Proof path outside upload prefix; not removing");
            return Ok(());
        };
        self.provider.delete(file_name).await
    }

    /// Whether the proof behind a public path is present.
    pub async fn exists(&self, public_path: &str) -> AppResult<bool> {
        match self.file_name_of(public_path) {
            Some(file_name) => self.provider.exists(file_name).await,
            None => Ok(false),
        }
    }

    /// Check the underlying provider.
    pub async fn health_check(&self) -> AppResult<bool> {
        self.provider.health_check().await
    }

    fn file_name_of<'a>(&self, public_path: &'a str) -> Option<&'a str> {
        public_path
            .strip_prefix(self.public_path.as_str())
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|name| !name.is_empty() && !name.contains('/'))
    }
}

/// Build a collision-free file name that keeps the sanitized original name.
fn unique_file_name(original_name: Option<&str>) -> String {
    let prefix = Uuid::now_v7().simple().to_string();
    let sanitized = original_name
        .map(|name| sanitize_filename::sanitize(name.trim()))
        .map(|name| name.replace(' ', "_"))
        .filter(|name| !name.is_empty() && name != "." && name != "..");

    match sanitized {
        Some(name) => format!("{prefix}-{name}"),
        None => format!("{prefix}-upload_{}", Utc::now().timestamp_millis()),
    }
}
