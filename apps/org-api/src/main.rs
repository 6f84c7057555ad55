//! tessera Organization Management API
//!
//! Axum server exposing the tenant lifecycle: organization creation with an
//! isolated data partition, lookup, rename, deletion, and administrator
//! authentication with tenant-scoped bearer tokens.

mod config;
mod logging;
mod openapi;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use chrono::Duration;
use config::Config;
use tessera_api_orgs::{auth_router, org_router, OrgAppState, OrgService};
use tessera_auth::TokenService;
use tessera_db::bootstrap::prepare_store;
use tessera_store::{DocumentStore, MemoryStore};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() {
    // Load configuration (fail-fast on missing required values)
    let config = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    logging::init_logging(&config.rust_log);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.host,
        port = config.port,
        "Starting tessera org API"
    );

    // In-memory store for now (replace with a driver-backed DocumentStore
    // implementation in production deployments).
    let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());

    // Declare registry collections and unique indexes before serving; the
    // storage layer is the authority on name/email uniqueness.
    if let Err(e) = prepare_store(store.as_ref()).await {
        eprintln!("FATAL: store preparation failed: {e}");
        std::process::exit(1);
    }

    let tokens = TokenService::new(
        config.token_secret.clone().into_bytes(),
        Duration::seconds(config.token_ttl_secs),
    );
    let service = Arc::new(OrgService::new(store, tokens));
    let state = OrgAppState::new(service);

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi::openapi_handler))
        .nest("/orgs", org_router(state.clone()))
        .nest("/auth", auth_router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = match config.bind_addr().parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("Invalid bind address '{}': {e}", config.bind_addr());
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("Failed to bind to address {addr}: {e}");
            std::process::exit(1);
        }
    };

    info!(%addr, "Server listening");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Liveness endpoint.
async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Graceful shutdown on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
