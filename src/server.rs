//! HTTP server initialization and runtime setup.
//!
//! Handles cookbook seeding, state construction, and Axum server lifecycle.

use crate::application::services::CookbookService;
use crate::config::Config;
use crate::domain::Cookbook;
use crate::infrastructure::seed;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cookbook (empty, or pre-filled from `SEED_FILE`)
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The seed file cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cookbook = match &config.seed_file {
        Some(path) => seed::load_cookbook(path)?,
        None => Cookbook::new(),
    };
    tracing::info!("Cookbook ready with {} entries", cookbook.len());

    let state = AppState::new(Arc::new(CookbookService::new(cookbook)));

    let app = app_router(state, config.rate_limit());

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
