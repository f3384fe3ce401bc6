//! HTTP server wiring: router, middleware and graceful shutdown.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use calculator::Service;
use calculator::api::rest::register_routes;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::cors::build_cors_layer;

/// Build the application router with calculator routes, request tracing and CORS.
///
/// # Errors
/// Returns an error if the CORS policy is invalid.
pub fn build_router(config: &AppConfig) -> Result<Router> {
    let service = Arc::new(Service::new());
    let cors = build_cors_layer(&config.cors)?;

    Ok(register_routes(Router::new(), service)
        .layer(TraceLayer::new_for_http())
        .layer(cors))
}

/// Bind and serve until SIGINT/SIGTERM.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve(config: &AppConfig) -> Result<()> {
    let addr = config.socket_addr()?;
    let router = build_router(config)?;

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, "Calculator server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Calculator server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
