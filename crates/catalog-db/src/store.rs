//! # Product Store
//!
//! The persistence capability the catalog service is written against.
//!
//! ## Seam
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ProductCatalogService<S: ProductStore>                                │
//! │       │                                                                 │
//! │       │  create / count / find_many / find_unique / update             │
//! │       ▼                                                                 │
//! │  ┌───────────────────────┐        ┌───────────────────────────┐        │
//! │  │  SqliteProductStore   │        │  test doubles             │        │
//! │  │  (repository/product) │        │  (record calls, in-memory)│        │
//! │  └───────────────────────┘        └───────────────────────────┘        │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each call is assumed atomic on its own; the service adds no transaction
//! around them.

use async_trait::async_trait;
use catalog_core::{NewProduct, Product, ProductChanges, ProductFilter};

use crate::error::DbResult;

/// Create/read/update access to the product entity.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Inserts a product and returns the stored record, including the
    /// assigned id and store defaults (`available = true`).
    async fn create(&self, input: &NewProduct) -> DbResult<Product>;

    /// Counts rows matching `filter`.
    async fn count(&self, filter: ProductFilter) -> DbResult<i64>;

    /// Returns up to `take` rows matching `filter`, after skipping `skip`.
    async fn find_many(&self, filter: ProductFilter, skip: u64, take: u32)
        -> DbResult<Vec<Product>>;

    /// Looks up one row by id, constrained by `filter`.
    async fn find_unique(&self, id: i64, filter: ProductFilter) -> DbResult<Option<Product>>;

    /// Applies `changes` to the row with `id` and returns the updated record.
    ///
    /// Fails with `DbError::NotFound` when no row has this id.
    async fn update(&self, id: i64, changes: &ProductChanges) -> DbResult<Product>;
}
