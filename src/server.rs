//! HTTP server initialization and runtime setup.
//!
//! Builds the key store and services, then runs the Axum server until a
//! shutdown signal arrives.

use crate::application::services::{ResolveService, ShortenService};
use crate::config::Config;
use crate::domain::{Clock, KeySource, KeyStore, RandomHexKeySource, SystemClock};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::url_validator::ShortUrlPattern;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the application state around a fresh, empty store.
///
/// # Errors
///
/// Returns an error if the short URL pattern cannot be compiled for `prefix`.
pub fn build_state(
    prefix: &str,
    key_source: Arc<dyn KeySource>,
    clock: Arc<dyn Clock>,
) -> Result<AppState> {
    let store = KeyStore::shared();
    let pattern = ShortUrlPattern::new(prefix).context("Failed to compile short url pattern")?;

    let shorten_service = Arc::new(ShortenService::new(
        store.clone(),
        key_source,
        clock.clone(),
        prefix,
    ));
    let resolve_service = Arc::new(ResolveService::new(store.clone(), clock, pattern));

    Ok(AppState {
        shorten_service,
        resolve_service,
        store,
    })
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(
        &config.prefix,
        Arc::new(RandomHexKeySource),
        Arc::new(SystemClock),
    )?;
    tracing::info!("Key store initialized");

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
