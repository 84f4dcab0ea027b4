//! # Domain Types
//!
//! The product record and the shapes that flow in and out of the catalog.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   NewProduct    │   │  ProductPatch   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (i64)       │   │  name           │   │  id?  (ignored) │       │
//! │  │  name           │   │  price          │   │  name?          │       │
//! │  │  price          │   └─────────────────┘   │  price?         │       │
//! │  │  available      │                         └────────┬────────┘       │
//! │  └─────────────────┘                                  │ into_changes() │
//! │                                                       ▼                │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │PaginationRequest│   │ PaginatedResult │   │ ProductChanges  │       │
//! │  │  page (1)       │   │  data: Vec<T>   │   │  name?          │       │
//! │  │  limit (10)     │   │  meta: PageMeta │   │  price?         │       │
//! │  └─────────────────┘   └─────────────────┘   │  available?     │       │
//! │                                              └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Soft Delete
//! A product is never removed from the table. Removing it flips
//! `available` to `false`, after which every read treats it as absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DEFAULT_LIMIT, DEFAULT_PAGE};

// =============================================================================
// Product
// =============================================================================

/// A catalog entry as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned identifier. Never changes after creation.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: f64,

    /// `false` once the product has been removed (soft delete).
    pub available: bool,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

// =============================================================================
// Create / Update Inputs
// =============================================================================

/// Payload for creating a product.
///
/// Carries every attribute except `id` and `available`; the store
/// assigns the id and defaults `available` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        NewProduct {
            name: name.into(),
            price,
        }
    }
}

/// Partial update payload as received from a caller.
///
/// `id` is accepted so that payloads echoing the record deserialize,
/// but it is dropped by [`ProductPatch::into_changes`] and can never
/// reach the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

impl ProductPatch {
    /// Strips the identity field and returns the writable changes.
    pub fn into_changes(self) -> ProductChanges {
        let ProductPatch { id: _, name, price } = self;
        ProductChanges {
            name,
            price,
            available: None,
        }
    }

    /// Returns true if the patch would not modify any field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none()
    }
}

/// Field changes accepted by the store's update operation.
///
/// Only `Some` fields are written. There is no `id` field: identity
/// is addressed separately and cannot be rewritten.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub available: Option<bool>,
}

impl ProductChanges {
    /// The change set used by soft delete.
    pub fn mark_unavailable() -> Self {
        ProductChanges {
            available: Some(false),
            ..Default::default()
        }
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Row filter passed to store reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Match on the availability flag; `None` matches every row.
    pub available: Option<bool>,
}

impl ProductFilter {
    /// Only products that have not been removed.
    pub const fn available() -> Self {
        ProductFilter {
            available: Some(true),
        }
    }

    /// Every row, removed or not.
    pub const fn any() -> Self {
        ProductFilter { available: None }
    }
}

// =============================================================================
// Pagination
// =============================================================================

/// Page selection for list requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationRequest {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_limit")]
    pub limit: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

impl PaginationRequest {
    pub const fn new(page: u32, limit: u32) -> Self {
        PaginationRequest { page, limit }
    }
}

impl Default for PaginationRequest {
    fn default() -> Self {
        PaginationRequest::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

/// Metadata returned alongside a page of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Count of all available products, independent of the window.
    pub total: i64,
    /// The requested page, echoed back unchanged.
    pub page: u32,
}

/// A page of results plus its metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

impl<T> PaginatedResult<T> {
    /// An empty page that still reports the full total.
    pub fn empty(total: i64, page: u32) -> Self {
        PaginatedResult {
            data: Vec::new(),
            meta: PageMeta { total, page },
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
