//! Gather API server entry point.
//!
//! Wires the process-wide singletons together: builds the entity
//! directory and change bus once, optionally installs the sample graph,
//! and serves the HTTP + `WebSocket` API until terminated.

mod config;
mod error;

use std::sync::Arc;

use gather_api::server::{ServerConfig, start_server};
use gather_api::state::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServiceConfig;

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// constructs the shared state, and runs the server until the process
/// is terminated.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the server fails to
/// bind.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("gather-server starting");

    let config = ServiceConfig::from_env()?;
    info!(
        host = config.host,
        port = config.port,
        channel_capacity = config.channel_capacity,
        seed = config.seed,
        "configuration loaded"
    );

    let state = Arc::new(AppState::with_bus_capacity(config.channel_capacity));

    if config.seed {
        let mut directory = state.directory.write().await;
        gather_core::seed::seed(&mut directory);
    }

    let server_config = ServerConfig {
        host: config.host,
        port: config.port,
    };
    start_server(&server_config, state).await?;

    Ok(())
}
