//! LangSight - language identification HTTP service
//!
//! Main entry point: loads configuration and the model artifact, then
//! serves the HTTP surface until interrupted.

use std::sync::Arc;

use anyhow::Context;
use langsight_app::utils::logging::init_tracing;
use langsight_app::{router, AppContext};
use langsight_domain::Config;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    init_tracing();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env file"),
        Err(err) => info!(error = %err, "no .env file loaded"),
    }

    let config = match langsight_infra::config::load() {
        Ok(config) => config,
        Err(err) => {
            warn!(error = %err, "no configuration found, using built-in defaults");
            Config::default()
        }
    };

    // Fatal if the model artifact or the request log is unusable: the
    // process must not accept requests in that state.
    let context = Arc::new(
        AppContext::new_with_config(config)
            .context("failed to initialize application context")?,
    );

    let addr = context.config.server.bind_address();
    let app = router(Arc::clone(&context));

    let listener =
        TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;

    info!(addr = %addr, "LangSight listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("LangSight shut down");
    Ok(())
}

/// Resolve when the process receives ctrl-c
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
    }
}
