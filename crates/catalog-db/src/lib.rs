//! # catalog-db: Database Layer for the Product Catalog
//!
//! This crate provides database access and the catalog service.
//! It uses SQLite for storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Product Catalog Data Flow                          │
//! │                                                                         │
//! │  HTTP handler (catalog-api)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    catalog-db (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────────┐  ┌────────────────┐  ┌──────────────┐     │   │
//! │  │   │ ProductCatalog │  │  ProductStore  │  │   Database   │     │   │
//! │  │   │    Service     │─►│ SqliteProduct  │─►│ (pool.rs)    │     │   │
//! │  │   │ (service.rs)   │  │    Store       │  │ + migrations │     │   │
//! │  │   └────────────────┘  └────────────────┘  └──────────────┘     │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │                     ./data/catalog.db                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database and catalog error types
//! - [`store`] - The `ProductStore` capability trait
//! - [`repository`] - SQLite store implementation
//! - [`service`] - `ProductCatalogService`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use catalog_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/catalog.db")).await?;
//! let catalog = db.catalog();
//!
//! let product = catalog.create(&NewProduct::new("Desk Lamp", 24.5)).await?;
//! let found = catalog.get_by_id(product.id).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod service;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult, DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use repository::product::SqliteProductStore;
pub use service::ProductCatalogService;
pub use store::ProductStore;
