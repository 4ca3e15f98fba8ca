// SPDX-License-Identifier: Apache-2.0

//! HTTP front end for issuescout.
//!
//! Serves `POST /api/analyze-repo` and `GET /health` on top of
//! [`issuescout_core::Analyzer`].

pub mod api;
pub mod error;
pub mod logging;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tokio::net::TcpListener;

pub use error::ErrorResponse;
pub use state::{AppState, CredentialStatus, HealthResponse};

/// Create the router with all routes
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/analyze-repo", post(api::analyze_repo))
        .with_state(state)
}

/// Run the HTTP server.
///
/// Starts an HTTP server on the specified host and port. Gracefully shuts
/// down on Ctrl+C.
pub async fn run_http(host: &str, port: u16, state: AppState) -> anyhow::Result<()> {
    // Handle both IPv4 and IPv6 addresses
    let addr: SocketAddr = if host.contains(':') {
        format!("[{host}]:{port}")
    } else {
        format!("{host}:{port}")
    }
    .parse()?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!("HTTP server listening on {}", addr);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down gracefully");
}
