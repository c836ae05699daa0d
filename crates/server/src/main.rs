//! Boutique Server - JSON API for the saree boutique demo.
//!
//! This binary serves the public API on port 5000.
//!
//! # Architecture
//!
//! - Axum web framework, JSON request/response bodies
//! - Single JSON document on disk for all entities, rewritten per mutation
//! - Signed session tokens for user auth; shared secret or admin-flagged
//!   token for administrative routes
//!
//! # Security
//!
//! Login is keyed by mobile number alone (no password); this is a demo
//! deployment model, not a production one.

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use boutique_server::config::ServerConfig;
use boutique_server::state::AppState;
use boutique_server::store::JsonFileStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "boutique_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Materialize the data file so a fresh deployment starts with an empty
    // document on disk
    let store = JsonFileStore::new(config.data_file.clone());
    store.init().await.expect("Failed to initialize data file");
    tracing::info!(path = %store.path().display(), "Document store ready");

    // Build application state and router
    let state = AppState::new(config.clone(), Box::new(store));
    let app = boutique_server::app(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("boutique server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
