mod config;
mod errors;
mod form;
mod routes;
mod state;
mod upload;
mod webhook;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::webhook::WebhookForwarder;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resume relay API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the webhook forwarder with a bounded outbound timeout
    let forwarder = WebhookForwarder::new(
        config.webhook_url.clone(),
        Duration::from_secs(config.webhook_timeout_secs),
    )?;
    info!(
        "Forwarding uploads to {} ({}s timeout)",
        config.webhook_url, config.webhook_timeout_secs
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        forwarder: Arc::new(forwarder),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
