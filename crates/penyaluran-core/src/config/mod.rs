//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;
pub mod storage;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Environment variable selecting the configuration overlay.
pub const ENV_VAR: &str = "PENYALURAN_ENV";

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay + environment variables).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Proof file storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files under `config/`.
    ///
    /// Merges `config/default`, the `config/{env}` overlay, and environment
    /// variables prefixed with `PENYALURAN__`. A plain `DATABASE_URL`
    /// variable overrides `database.url` last.
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Load configuration from TOML files in the given directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        Self::build(
            dir,
            env,
            config::Environment::with_prefix("PENYALURAN"),
            std::env::var("DATABASE_URL").ok(),
        )
    }

    fn build(
        dir: &str,
        env: &str,
        environment: config::Environment,
        database_url: Option<String>,
    ) -> Result<Self, AppError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                environment
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Some(url) = database_url {
            builder = builder.set_override("database.url", url)?;
        }

        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
