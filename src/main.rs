//! Gemini Gateway
//!
//! A single-endpoint HTTP gateway in front of the Google
//! generative-language API, built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌────────────────────────────────────────────────┐
//!                    │                   GATEWAY                       │
//!                    │                                                 │
//!   Client Request   │  ┌──────────┐   ┌──────────┐   ┌────────────┐  │
//!   ─────────────────┼─▶│ validate │──▶│  roles   │──▶│   merge    │  │
//!                    │  └──────────┘   └──────────┘   └─────┬──────┘  │
//!                    │                                      │         │
//!                    │                                      ▼         │
//!   Client Response  │  ┌──────────┐                 ┌────────────┐   │
//!   ◀────────────────┼──│  relay   │◀────────────────│ forwarder  │◀──┼── Provider
//!                    │  └──────────┘                 └────────────┘   │
//!                    │                                                 │
//!                    │  Cross-cutting: config, error envelopes,        │
//!                    │  tracing, request IDs, metrics                  │
//!                    └────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gemini_gateway::config::loader;
use gemini_gateway::HttpServer;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gemini_gateway=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("gemini-gateway v0.1.0 starting");

    // Load configuration (optional file path from GATEWAY_CONFIG)
    let config_path = std::env::var_os("GATEWAY_CONFIG").map(PathBuf::from);
    let config = loader::load(config_path.as_deref())?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream = %config.upstream.base_url,
        relay_mode = ?config.relay.mode,
        api_key_configured = config.upstream.api_key.is_some(),
        forced_overrides = config.merge.overrides.len(),
        "Configuration loaded"
    );

    if config.upstream.api_key.is_none() {
        tracing::warn!(
            "{} is not set; every request will fail with a configuration error",
            loader::API_KEY_ENV
        );
    }

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Initialize metrics server
    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            gemini_gateway::observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
