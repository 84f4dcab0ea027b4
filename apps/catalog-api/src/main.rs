//! # Catalog API Server
//!
//! Serves the product catalog over HTTP.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog API Server                               │
//! │                                                                         │
//! │  tracing init ──► CatalogConfig::load ──► Database::new (+ migrations) │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │  Client ───► HTTP (3000) ───► Router ───► ProductCatalogService        │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │                                        SQLite (./data/catalog.db)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use catalog_api::{app, AppState, CatalogConfig};
use catalog_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "catalog_api=debug,catalog_db=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    info!("Starting Catalog API server...");

    // Load configuration
    let config = CatalogConfig::load()?;
    info!(
        port = config.http_port,
        db_path = %config.database_path.display(),
        "Configuration loaded"
    );

    // Make sure the database directory exists
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create data directory {}", parent.display())
            })?;
        }
    }

    // Connect to database (runs migrations)
    let db = Database::new(config.db_config()).await?;
    info!("Connected to SQLite");

    let router = app(AppState::new(db.clone(), config.pagination_max_limit));

    // Build server address
    let addr = SocketAddr::from(([0, 0, 0, 0], config.http_port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!(%addr, "Starting HTTP server");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
