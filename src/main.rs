//! Penyaluran Server: distribution report upload and review service.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use penyaluran_api::AppState;
use penyaluran_core::config::{AppConfig, ENV_VAR};
use penyaluran_core::error::AppError;
use penyaluran_database::DatabasePool;
use penyaluran_database::migration::run_migrations;
use penyaluran_database::seed::seed_programs;

#[tokio::main]
async fn main() {
    let env = std::env::var(ENV_VAR).unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(%env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    if config.logging.format == "json" {
        fmt()
            .json()
            .with_env_filter(filter)
            .with_current_span(false)
            .flatten_event(true)
            .init();
    } else {
        fmt().pretty().with_env_filter(filter).with_target(false).init();
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Penyaluran v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    // ── Step 2: Reference data ───────────────────────────────────
    if config.database.seed_programs {
        seed_programs(db.pool()).await?;
    }

    // ── Step 3: Storage, services, and HTTP server ───────────────
    let state = AppState::build(config, db.clone()).await?;
    tracing::info!(
        upload_dir = %state.config.storage.upload_dir,
        "Proof storage ready"
    );

    let result = penyaluran_api::run_server(state).await;
    db.close().await;
    result
}
