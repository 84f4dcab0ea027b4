//! # Product Repository
//!
//! SQLite implementation of [`ProductStore`].
//!
//! ## Key Operations
//! - Insert with store-assigned id and `available` default
//! - Filtered count and windowed listing
//! - Partial update through `COALESCE`
//!
//! ## Partial Update
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ProductChanges { name: Some("Lamp"), price: None, available: None }    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  UPDATE products SET                                                   │
//! │      name      = COALESCE('Lamp', name)       ← replaced               │
//! │      price     = COALESCE(NULL,   price)      ← kept                   │
//! │      available = COALESCE(NULL,   available)  ← kept                   │
//! │  WHERE id = ?                                                          │
//! │  RETURNING *                                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::store::ProductStore;
use catalog_core::{NewProduct, Product, ProductChanges, ProductFilter};

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = SqliteProductStore::new(pool);
///
/// let product = repo.create(&NewProduct::new("Desk Lamp", 24.5)).await?;
/// let found = repo.find_unique(product.id, ProductFilter::available()).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    /// Creates a new SqliteProductStore.
    pub fn new(pool: SqlitePool) -> Self {
        SqliteProductStore { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn create(&self, input: &NewProduct) -> DbResult<Product> {
        debug!(name = %input.name, "Inserting product");

        let now = Utc::now();

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products (name, price, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, name, price, available, created_at, updated_at
            "#,
        )
        .bind(&input.name)
        .bind(input.price)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        debug!(id = product.id, "Product inserted");
        Ok(product)
    }

    async fn count(&self, filter: ProductFilter) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products WHERE (?1 IS NULL OR available = ?1)",
        )
        .bind(filter.available)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    /// Rows come back in ascending id order, which is insertion order.
    async fn find_many(
        &self,
        filter: ProductFilter,
        skip: u64,
        take: u32,
    ) -> DbResult<Vec<Product>> {
        debug!(skip, take, "Listing products");

        // SQLite LIMIT/OFFSET are signed 64-bit
        let skip = i64::try_from(skip).unwrap_or(i64::MAX);

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, available, created_at, updated_at
            FROM products
            WHERE (?1 IS NULL OR available = ?1)
            ORDER BY id
            LIMIT ?2 OFFSET ?3
            "#,
        )
        .bind(filter.available)
        .bind(i64::from(take))
        .bind(skip)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Listing returned products");
        Ok(products)
    }

    async fn find_unique(&self, id: i64, filter: ProductFilter) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, price, available, created_at, updated_at
            FROM products
            WHERE id = ?1 AND (?2 IS NULL OR available = ?2)
            "#,
        )
        .bind(id)
        .bind(filter.available)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn update(&self, id: i64, changes: &ProductChanges) -> DbResult<Product> {
        debug!(id, ?changes, "Updating product");

        let now = Utc::now();

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name = COALESCE(?2, name),
                price = COALESCE(?3, price),
                available = COALESCE(?4, available),
                updated_at = ?5
            WHERE id = ?1
            RETURNING id, name, price, available, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.price)
        .bind(changes.available)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        product.ok_or_else(|| DbError::not_found("Product", id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
