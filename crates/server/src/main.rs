//! Statuswatch server binary.
//!
//! Serves the authenticated status push API in front of the Supabase-backed
//! status tables.

use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statuswatch_server::{build_router, AppState, ServerConfig};
use statuswatch_store::{SupabaseConfig, SupabaseStore};

/// Initialize tracing/logging.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,statuswatch_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting statuswatch server"
    );

    // Load configuration
    let config = ServerConfig::from_env().context("AUTH_* configuration is incomplete")?;
    let supabase_config =
        SupabaseConfig::from_env().context("SUPABASE_* configuration is incomplete")?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        "Configuration loaded"
    );

    // Create the datastore client and application state
    let store = Arc::new(SupabaseStore::new(&supabase_config));
    let state = AppState::new(config.clone(), store);

    // Build the router
    let app = build_router(state);

    // Bind to address
    let addr: SocketAddr = config.bind_address().parse().context("Invalid bind address")?;
    let listener = TcpListener::bind(addr).await?;

    tracing::info!(address = %addr, "Server listening");

    // Run the server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");

    Ok(())
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
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
