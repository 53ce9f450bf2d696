//! REST server for the backup organizer
//!
//! This crate exposes the collection registry over HTTP. The registry is
//! created once at start-up and shared with every handler through the router
//! state.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

pub mod api;
mod rest_server;

use anyhow::Context;
use backup_organizer_core::config::Config;
use backup_organizer_core::CollectionManager;
use tracing::{error, info};

pub use rest_server::{build_router, ApiError, AppState};

/// Run the REST server with the given configuration.
///
/// It:
/// 1. Creates an empty collection registry
/// 2. Binds the configured `host:port`
/// 3. Serves the REST API until Ctrl+C, then shuts down gracefully
///
/// # Returns
///
/// Returns `Ok(())` on clean shutdown, or an error if binding or serving fails.
pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let state = AppState::new(CollectionManager::new());
    let router = build_router(state, &config.server);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind REST server to {address}"))?;

    info!(
        "REST API listening on http://{}",
        listener.local_addr().context("Failed to read bound address")?
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("REST server terminated with an error")?;

    info!("REST server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down"),
        Err(e) => {
            // Without a signal handler the server runs until killed
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    }
}
