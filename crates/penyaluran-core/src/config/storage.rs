//! Proof file storage configuration.

use serde::{Deserialize, Serialize};

/// Storage configuration for uploaded proof files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory where uploaded files are written.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// URL path prefix under which uploaded files are served.
    #[serde(default = "default_public_path")]
    pub public_path: String,
    /// Maximum upload size in bytes (default 50 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            public_path: default_public_path(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_upload_dir() -> String {
    "./public/uploads".to_string()
}

fn default_public_path() -> String {
    "/uploads".to_string()
}

fn default_max_upload() -> u64 {
    52_428_800 // 50 MB
}
