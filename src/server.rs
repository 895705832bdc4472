//! Axum HTTP server: router, listener, graceful shutdown.

use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::config::ServiceConfig;
use crate::secret;

/// Build and run the HTTP server.
pub async fn run(config: ServiceConfig) -> anyhow::Result<()> {
    let listen_addr = config.server.listen_address;

    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;
    tracing::info!(address = %listen_addr, "integration-secrets listening");

    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("integration-secrets shut down gracefully");
    Ok(())
}

/// Build the application router.
///
/// Unmatched paths fall through to axum's default 404 handler; a matched
/// path with the wrong method gets the default 405.
fn router() -> Router {
    Router::new()
        .route("/integrate", get(handle_integrate))
        .route("/v1/integrate", get(handle_integrate_v1))
}

/// GET /integrate — issue a fresh integration secret.
async fn handle_integrate() -> impl IntoResponse {
    tracing::info!("HI");
    Json(json!({ "secret": secret::generate() }))
}

/// GET /v1/integrate — versioned alias of `/integrate`.
///
/// Same contract and behavior; no versioning semantics are shared with
/// the unversioned path.
async fn handle_integrate_v1() -> impl IntoResponse {
    tracing::info!("v1 HI");
    Json(json!({ "secret": secret::generate() }))
}

/// Wait for SIGINT (Ctrl+C) for graceful shutdown.
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received, draining connections...");
}
