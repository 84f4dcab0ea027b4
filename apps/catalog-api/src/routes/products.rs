//! Product endpoints.
//!
//! ## Routes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  POST   /products            ──► validate ──► catalog.create   (201)   │
//! │  GET    /products?page&limit ──► validate ──► catalog.list             │
//! │  GET    /products/{id}       ─────────────► catalog.get_by_id          │
//! │  PATCH  /products/{id}       ──► validate ──► catalog.update           │
//! │  DELETE /products/{id}       ─────────────► catalog.remove             │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Payloads are checked here with `catalog_core::validation` before the
//! service runs. Extractor rejections are turned into `VALIDATION_ERROR`
//! responses instead of axum's plain-text defaults.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use catalog_core::validation::{validate_new_product, validate_pagination, validate_patch};
use catalog_core::{NewProduct, PaginatedResult, PaginationRequest, Product, ProductPatch};
use tracing::debug;

use crate::error::ApiResult;
use crate::AppState;

/// Product routes, merged into the application router by [`crate::app`].
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list).post(create))
        .route("/products/{id}", get(find_one).patch(update).delete(remove))
}

/// `POST /products`
pub async fn create(
    State(state): State<Arc<AppState>>,
    body: Result<Json<NewProduct>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    let Json(input) = body?;
    validate_new_product(&input)?;

    let product = state.catalog.create(&input).await?;
    debug!(id = product.id, "Product created");

    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /products?page=&limit=`
pub async fn list(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PaginationRequest>, QueryRejection>,
) -> ApiResult<Json<PaginatedResult<Product>>> {
    let Query(request) = query?;
    validate_pagination(&request, state.max_limit)?;

    debug!(page = request.page, limit = request.limit, "Listing products");
    Ok(Json(state.catalog.list(&request).await?))
}

/// `GET /products/{id}`
pub async fn find_one(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.catalog.get_by_id(id).await?))
}

/// `PATCH /products/{id}`
pub async fn update(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<ProductPatch>, JsonRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    let Json(patch) = body?;
    validate_patch(&patch)?;

    debug!(id, "Updating product");
    Ok(Json(state.catalog.update(id, patch).await?))
}

/// `DELETE /products/{id}`
///
/// Soft delete: the product is returned with `available: false`.
pub async fn remove(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(id) = id?;
    Ok(Json(state.catalog.remove(id).await?))
}
