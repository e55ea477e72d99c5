//! Token-Gated Embed Redirector
//!
//! A thin HTTP service that maps a (server label, media id) pair to a
//! short-lived opaque playback token and serves a minimal player page
//! embedding the third-party iframe the token resolves to.

#![allow(dead_code)]

mod config;
mod config_file;
mod error;
mod http;
mod integration;
mod player;
mod registry;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::error::{GateError, Result};
use crate::http::create_router;
use crate::state::AppState;

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
const APP_NAME: &str = "vidgate";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    tracing::info!("{} v{} starting", APP_NAME, VERSION);

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = if std::path::Path::new(&config_path).exists() {
        match crate::config_file::ConfigFile::from_file(&config_path) {
            Ok(cf) => cf.into_server_config(),
            Err(e) => {
                tracing::warn!(
                    "Failed to load config file {}: {}. Using defaults.",
                    config_path,
                    e
                );
                ServerConfig::default()
            }
        }
    } else {
        ServerConfig::default()
    };
    tracing::info!("Configuration loaded: {:?}", config);

    // Create application state
    let state = Arc::new(AppState::new(config.clone()));

    // Background eviction of expired bindings
    spawn_binding_sweeper(state.clone());

    // Build router
    let app = create_router(state);

    // Start server
    let addr: SocketAddr = config
        .socket_addr()
        .parse()
        .map_err(|e| GateError::Config(format!("Invalid listen address: {}", e)))?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Periodically drop expired bindings so the store does not grow
/// unboundedly under sustained traffic. A sweep interval of 0 disables
/// the task; lookups still treat expired entries as invalid.
fn spawn_binding_sweeper(state: Arc<AppState>) {
    let interval = Duration::from_secs(state.config.tokens.sweep_interval_secs);
    if interval.is_zero() {
        tracing::info!("Binding sweep disabled");
        return;
    }

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately; skip it.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = state.cleanup_expired_bindings();
            if removed > 0 {
                tracing::debug!("Swept {} expired bindings", removed);
            }
        }
    });
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidgate=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
