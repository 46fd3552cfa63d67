//! Meridian Storefront server.
//!
//! Main entry point that wires configuration, stores, the auth core, and
//! the HTTP API together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use storefront_api::AppState;
use storefront_auth::password::PasswordHasher;
use storefront_core::config::AppConfig;
use storefront_core::error::AppError;
use storefront_database::stores::Stores;

#[tokio::main]
async fn main() {
    let env = std::env::var("STOREFRONT_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        "Starting Meridian Storefront v{}",
        env!("CARGO_PKG_VERSION")
    );

    // ── Step 1: Stores (connection + migrations for postgres) ────
    let stores = Stores::connect(&config.database).await?;

    // ── Step 2: Seed the administrator account ───────────────────
    storefront_auth::seed::ensure_seed_admin(&stores.users, &PasswordHasher::new(), &config.auth)
        .await?;

    // ── Step 3: Build state and router ───────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(Arc::new(config), stores);
    let router = storefront_api::build_router(state);

    // ── Step 4: Serve ────────────────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "HTTP server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Completes when a shutdown signal is received.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received");
    }
}
