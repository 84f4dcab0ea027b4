//! # Catalog API
//!
//! JSON/HTTP server for the product catalog.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Catalog API Routes                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────┐  ┌─────────────────────────┐ │
//! │  │  routes::products                    │  │  routes::health         │ │
//! │  │                                      │  │                         │ │
//! │  │ • POST   /products                   │  │ • GET /health           │ │
//! │  │ • GET    /products?page=&limit=      │  │                         │ │
//! │  │ • GET    /products/{id}              │  └─────────────────────────┘ │
//! │  │ • PATCH  /products/{id}              │                              │
//! │  │ • DELETE /products/{id}              │                              │
//! │  └──────────────────────────────────────┘                              │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  ProductCatalogService<SqliteProductStore>  (catalog-db)         │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `HTTP_PORT` - HTTP server port (default: 3000)
//! - `DATABASE_PATH` - SQLite database file (default: ./data/catalog.db)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT_SECS` - Connection acquire timeout (default: 30)
//! - `PAGINATION_MAX_LIMIT` - Largest allowed `limit` (default: 100)
//! - `RUST_LOG` - Log filter (default: catalog_api=debug,catalog_db=debug,tower_http=debug)

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use catalog_db::{Database, ProductCatalogService, SqliteProductStore};
use tower_http::trace::TraceLayer;

// Re-exports
pub use config::{CatalogConfig, ConfigError};
pub use error::{ApiError, ApiResult, ErrorCode};

/// Shared application state.
pub struct AppState {
    pub catalog: ProductCatalogService<SqliteProductStore>,
    pub db: Database,
    pub max_limit: u32,
}

impl AppState {
    /// Builds the state around an open database.
    pub fn new(db: Database, max_limit: u32) -> Self {
        AppState {
            catalog: db.catalog(),
            db,
            max_limit,
        }
    }
}

/// Builds the application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::products::router())
        .route("/health", get(routes::health::check))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
