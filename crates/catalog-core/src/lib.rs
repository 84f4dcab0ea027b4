//! # catalog-core: Pure Types for the Product Catalog
//!
//! This crate holds everything about the catalog that does not touch a
//! database or a socket: the product record, the request/response shapes,
//! pagination math and boundary validation.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Product Catalog Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                catalog-api (HTTP boundary, axum)                │   │
//! │  │    POST /products, GET /products, PATCH/DELETE /products/{id}   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ catalog-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌────────────┐               │   │
//! │  │   │   types   │  │ pagination │  │ validation │               │   │
//! │  │   │  Product  │  │  last_page │  │   rules    │               │   │
//! │  │   │  Patch    │  │  offset    │  │   checks   │               │   │
//! │  │   └───────────┘  └────────────┘  └────────────┘               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          catalog-db (ProductStore, ProductCatalogService)       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product record and input/output shapes
//! - [`pagination`] - Page window arithmetic
//! - [`error`] - Validation error type
//! - [`validation`] - Boundary validation rules
//!
//! ## Example Usage
//!
//! ```rust
//! use catalog_core::pagination::{last_page, window};
//! use catalog_core::PaginationRequest;
//!
//! let request = PaginationRequest::new(3, 10);
//!
//! // 25 available products at 10 per page → 3 pages
//! assert_eq!(last_page(25, request.limit), 3);
//!
//! // Page 3 starts after 20 rows
//! assert_eq!(window(25, &request), Some(20));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod pagination;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Page requested when the caller omits `page`.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller omits `limit`.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size the HTTP boundary accepts by default.
///
/// ## Business Reason
/// Keeps a single list request from pulling the whole table.
/// Deployments can override it through configuration.
pub const MAX_LIMIT: u32 = 100;

/// Maximum length of a product name, in characters.
pub const MAX_NAME_LEN: usize = 200;
