//! # Product Catalog Service
//!
//! The five catalog operations, expressed as calls against a [`ProductStore`].
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  create ─────────────────────────────────────► store.create            │
//! │                                                                         │
//! │  list ──► store.count(available) ──► page > last_page? ──► empty page  │
//! │                                             │ no                        │
//! │                                             ▼                           │
//! │                                  store.find_many(available, window)    │
//! │                                                                         │
//! │  get_by_id ──► store.find_unique(id, available) ──► None → NotFound    │
//! │                                                                         │
//! │  update ──► get_by_id ──► store.update(id, patch without id)           │
//! │                                                                         │
//! │  remove ──► get_by_id ──► store.update(id, available = false)          │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The service keeps no state besides the store handle, so one instance can
//! serve concurrent requests. Races between concurrent writes to the same id
//! are left to the store.

use catalog_core::pagination;
use catalog_core::validation::validate_pagination;
use catalog_core::{
    NewProduct, PageMeta, PaginatedResult, PaginationRequest, Product, ProductChanges,
    ProductFilter, ProductPatch,
};
use tracing::{debug, info};

use crate::error::{CatalogError, CatalogResult};
use crate::store::ProductStore;

/// Catalog operations over an injected [`ProductStore`].
///
/// ## Usage
/// ```rust,ignore
/// let catalog = ProductCatalogService::new(db.products());
///
/// let lamp = catalog.create(&NewProduct::new("Desk Lamp", 24.5)).await?;
/// let page = catalog.list(&PaginationRequest::default()).await?;
/// catalog.remove(lamp.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductCatalogService<S> {
    store: S,
}

impl<S: ProductStore> ProductCatalogService<S> {
    /// Wraps a store. Logs once per construction.
    pub fn new(store: S) -> Self {
        info!("ProductCatalogService initialized");
        ProductCatalogService { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Creates a product and returns the stored record.
    pub async fn create(&self, input: &NewProduct) -> CatalogResult<Product> {
        Ok(self.store.create(input).await?)
    }

    /// Returns one page of available products.
    ///
    /// `meta.total` always counts every available product, and `meta.page`
    /// echoes the requested page even when it is past the end. Pages past
    /// the end are answered without fetching rows.
    pub async fn list(&self, request: &PaginationRequest) -> CatalogResult<PaginatedResult<Product>> {
        validate_pagination(request, u32::MAX)?;

        let total = self.store.count(ProductFilter::available()).await?;

        let Some(skip) = pagination::window(total, request) else {
            debug!(
                total,
                page = request.page,
                limit = request.limit,
                "Requested page is past the last page"
            );
            return Ok(PaginatedResult::empty(total, request.page));
        };

        let data = self
            .store
            .find_many(ProductFilter::available(), skip, request.limit)
            .await?;

        Ok(PaginatedResult {
            data,
            meta: PageMeta {
                total,
                page: request.page,
            },
        })
    }

    /// Fetches an available product.
    ///
    /// A soft-deleted product is reported exactly like a missing one.
    pub async fn get_by_id(&self, id: i64) -> CatalogResult<Product> {
        self.store
            .find_unique(id, ProductFilter::available())
            .await?
            .ok_or(CatalogError::NotFound(id))
    }

    /// Applies a partial update to an available product.
    ///
    /// Any `id` carried by the patch is discarded; the record is addressed
    /// only by the `id` argument.
    pub async fn update(&self, id: i64, patch: ProductPatch) -> CatalogResult<Product> {
        let changes = patch.into_changes();

        self.get_by_id(id).await?;

        Ok(self.store.update(id, &changes).await?)
    }

    /// Soft-deletes an available product and returns it with
    /// `available: false`.
    ///
    /// A second call for the same id fails with `NotFound`.
    pub async fn remove(&self, id: i64) -> CatalogResult<Product> {
        self.get_by_id(id).await?;

        let product = self
            .store
            .update(id, &ProductChanges::mark_unavailable())
            .await?;

        info!(id, "Product removed");
        Ok(product)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DbResult;
    use crate::{Database, DbConfig, SqliteProductStore};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    async fn catalog() -> ProductCatalogService<SqliteProductStore> {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        ProductCatalogService::new(db.products())
    }

    async fn seed<S: ProductStore>(catalog: &ProductCatalogService<S>, n: usize) -> Vec<Product> {
        let mut created = Vec::with_capacity(n);
        for i in 1..=n {
            let product = catalog
                .create(&NewProduct::new(format!("Product {}", i), i as f64))
                .await
                .unwrap();
            created.push(product);
        }
        created
    }

    /// In-memory store that counts calls, used to check which store
    /// operations a catalog call performs.
    #[derive(Default)]
    struct RecordingStore {
        rows: Mutex<Vec<Product>>,
        count_calls: AtomicUsize,
        find_many_calls: AtomicUsize,
        update_calls: AtomicUsize,
    }

    fn filter_matches(filter: ProductFilter, product: &Product) -> bool {
        filter.available.map_or(true, |a| product.available == a)
    }

    #[async_trait]
    impl ProductStore for RecordingStore {
        async fn create(&self, input: &NewProduct) -> DbResult<Product> {
            let mut rows = self.rows.lock().unwrap();
            let now = Utc::now();
            let product = Product {
                id: rows.len() as i64 + 1,
                name: input.name.clone(),
                price: input.price,
                available: true,
                created_at: now,
                updated_at: now,
            };
            rows.push(product.clone());
            Ok(product)
        }

        async fn count(&self, filter: ProductFilter) -> DbResult<i64> {
            self.count_calls.fetch_add(1, Ordering::SeqCst);
            let rows = self.rows.lock().unwrap();
            Ok(rows.iter().filter(|p| filter_matches(filter, p)).count() as i64)
        }

        async fn find_many(
            &self,
            filter: ProductFilter,
            skip: u64,
            take: u32,
        ) -> DbResult<Vec<Product>> {
            self.find_many_calls.fetch_add(1, Ordering::SeqCst);
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .filter(|p| filter_matches(filter, p))
                .skip(skip as usize)
                .take(take as usize)
                .cloned()
                .collect())
        }

        async fn find_unique(&self, id: i64, filter: ProductFilter) -> DbResult<Option<Product>> {
            let rows = self.rows.lock().unwrap();
            Ok(rows
                .iter()
                .find(|p| p.id == id && filter_matches(filter, p))
                .cloned())
        }

        async fn update(&self, id: i64, changes: &ProductChanges) -> DbResult<Product> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| crate::DbError::not_found("Product", id))?;
            if let Some(name) = &changes.name {
                row.name = name.clone();
            }
            if let Some(price) = changes.price {
                row.price = price;
            }
            if let Some(available) = changes.available {
                row.available = available;
            }
            row.updated_at = Utc::now();
            Ok(row.clone())
        }
    }

    // -------------------------------------------------------------------------
    // create / get_by_id
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_read_after_write() {
        let catalog = catalog().await;

        let created = catalog
            .create(&NewProduct::new("Desk Lamp", 24.5))
            .await
            .unwrap();
        let fetched = catalog.get_by_id(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert!(fetched.available);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let catalog = catalog().await;

        assert!(matches!(
            catalog.get_by_id(404).await,
            Err(CatalogError::NotFound(404))
        ));
        assert!(matches!(
            catalog.update(404, ProductPatch::default()).await,
            Err(CatalogError::NotFound(404))
        ));
        assert!(matches!(
            catalog.remove(404).await,
            Err(CatalogError::NotFound(404))
        ));
    }

    // -------------------------------------------------------------------------
    // update
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_update_ignores_id_in_patch() {
        let catalog = catalog().await;
        let products = seed(&catalog, 2).await;
        let target = &products[0];
        let other = &products[1];

        let patch = ProductPatch {
            id: Some(other.id),
            name: Some("Renamed".to_string()),
            price: None,
        };
        let updated = catalog.update(target.id, patch).await.unwrap();

        assert_eq!(updated.id, target.id);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.price, target.price);

        // The product whose id was smuggled into the patch is untouched
        let untouched = catalog.get_by_id(other.id).await.unwrap();
        assert_eq!(untouched.name, other.name);
    }

    #[tokio::test]
    async fn test_update_keeps_availability() {
        let catalog = catalog().await;
        let product = seed(&catalog, 1).await.remove(0);

        let patch = ProductPatch {
            price: Some(99.0),
            ..Default::default()
        };
        let updated = catalog.update(product.id, patch).await.unwrap();

        assert!(updated.available);
        assert_eq!(updated.price, 99.0);
        assert_eq!(updated.name, product.name);
    }

    #[tokio::test]
    async fn test_update_of_removed_product_is_not_found() {
        let catalog = catalog().await;
        let product = seed(&catalog, 1).await.remove(0);
        catalog.remove(product.id).await.unwrap();

        let patch = ProductPatch {
            name: Some("Back again".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            catalog.update(product.id, patch).await,
            Err(CatalogError::NotFound(id)) if id == product.id
        ));
    }

    // -------------------------------------------------------------------------
    // remove
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_remove_succeeds_once_then_not_found() {
        let catalog = catalog().await;
        let product = seed(&catalog, 1).await.remove(0);

        let removed = catalog.remove(product.id).await.unwrap();
        assert_eq!(removed.id, product.id);
        assert!(!removed.available);

        assert!(matches!(
            catalog.remove(product.id).await,
            Err(CatalogError::NotFound(_))
        ));
        assert!(matches!(
            catalog.get_by_id(product.id).await,
            Err(CatalogError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_does_not_write_when_missing() {
        let catalog = ProductCatalogService::new(RecordingStore::default());

        assert!(catalog.remove(1).await.is_err());
        assert_eq!(catalog.store().update_calls.load(Ordering::SeqCst), 0);
    }

    // -------------------------------------------------------------------------
    // list
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_empty_catalog() {
        let catalog = ProductCatalogService::new(RecordingStore::default());

        for page in [1, 2, 10] {
            let result = catalog
                .list(&PaginationRequest::new(page, 10))
                .await
                .unwrap();
            assert!(result.data.is_empty());
            assert_eq!(result.meta, PageMeta { total: 0, page });
        }

        assert_eq!(catalog.store().find_many_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_list_last_partial_page() {
        let catalog = catalog().await;
        let products = seed(&catalog, 25).await;

        let result = catalog.list(&PaginationRequest::new(3, 10)).await.unwrap();

        assert_eq!(result.meta, PageMeta { total: 25, page: 3 });
        assert_eq!(result.data.len(), 5);
        let ids: Vec<_> = result.data.iter().map(|p| p.id).collect();
        let expected: Vec<_> = products[20..].iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[tokio::test]
    async fn test_list_past_last_page_skips_fetch() {
        let catalog = ProductCatalogService::new(RecordingStore::default());
        seed(&catalog, 25).await;

        let result = catalog.list(&PaginationRequest::new(4, 10)).await.unwrap();

        assert!(result.data.is_empty());
        assert_eq!(result.meta, PageMeta { total: 25, page: 4 });
        assert_eq!(catalog.store().count_calls.load(Ordering::SeqCst), 1);
        assert_eq!(catalog.store().find_many_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_list_total_excludes_removed() {
        let catalog = catalog().await;
        let products = seed(&catalog, 3).await;
        catalog.remove(products[1].id).await.unwrap();

        let result = catalog.list(&PaginationRequest::default()).await.unwrap();

        assert_eq!(result.meta.total, 2);
        assert!(result.data.iter().all(|p| p.available));
        assert!(result.data.iter().all(|p| p.id != products[1].id));
    }

    #[tokio::test]
    async fn test_list_rejects_zero_limit() {
        let catalog = ProductCatalogService::new(RecordingStore::default());

        let err = catalog
            .list(&PaginationRequest::new(1, 0))
            .await
            .unwrap_err();

        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(catalog.store().count_calls.load(Ordering::SeqCst), 0);
    }

    // -------------------------------------------------------------------------
    // Full lifecycle
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_create_list_remove_lifecycle() {
        let catalog = catalog().await;
        seed(&catalog, 2).await;

        let a = catalog
            .create(&NewProduct::new("Product A", 12.0))
            .await
            .unwrap();

        let before = catalog.list(&PaginationRequest::new(1, 10)).await.unwrap();
        let listed = before.data.iter().find(|p| p.id == a.id).unwrap();
        assert!(listed.available);

        catalog.remove(a.id).await.unwrap();

        let after = catalog.list(&PaginationRequest::new(1, 10)).await.unwrap();
        assert!(after.data.iter().all(|p| p.id != a.id));
        assert_eq!(after.meta.total, before.meta.total - 1);

        assert!(matches!(
            catalog.get_by_id(a.id).await,
            Err(CatalogError::NotFound(id)) if id == a.id
        ));
    }
}
