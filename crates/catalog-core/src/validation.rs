//! # Validation Module
//!
//! Boundary validation for catalog requests.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: HTTP boundary (catalog-api)                                   │
//! │  ├── Type validation (deserialization, numeric coercion)               │
//! │  └── THIS MODULE: field rules (name, price, page, limit)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: ProductCatalogService                                         │
//! │  └── Re-checks pagination so a zero limit never reaches the math       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                             │
//! │  ├── NOT NULL constraints                                              │
//! │  └── CHECK (price >= 0)                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use catalog_core::validation::{validate_new_product, validate_pagination};
//! use catalog_core::{NewProduct, PaginationRequest};
//!
//! validate_new_product(&NewProduct::new("Desk Lamp", 24.5)).unwrap();
//! validate_pagination(&PaginationRequest::new(1, 10), 100).unwrap();
//! ```

use crate::error::ValidationError;
use crate::{NewProduct, PaginationRequest, ProductPatch, MAX_NAME_LEN};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
///
/// ## Example
/// ```rust
/// use catalog_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Desk Lamp").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be a finite number (no NaN / infinity)
/// - Must be non-negative; zero is allowed (free items)
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }

    if price < 0.0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Request Validators
// =============================================================================

/// Validates a create payload.
pub fn validate_new_product(input: &NewProduct) -> ValidationResult<()> {
    validate_product_name(&input.name)?;
    validate_price(input.price)
}

/// Validates an update payload. Absent fields are not checked.
pub fn validate_patch(patch: &ProductPatch) -> ValidationResult<()> {
    if let Some(name) = &patch.name {
        validate_product_name(name)?;
    }
    if let Some(price) = patch.price {
        validate_price(price)?;
    }
    Ok(())
}

/// Validates a list request.
///
/// ## Rules
/// - `page` must be at least 1
/// - `limit` must be between 1 and `max_limit`
///
/// A zero limit would make the page count undefined, so it is rejected
/// here instead of being passed to the pagination math.
pub fn validate_pagination(request: &PaginationRequest, max_limit: u32) -> ValidationResult<()> {
    if request.page == 0 {
        return Err(ValidationError::MustBePositive {
            field: "page".to_string(),
        });
    }

    if request.limit == 0 || request.limit > max_limit {
        return Err(ValidationError::OutOfRange {
            field: "limit".to_string(),
            min: 1,
            max: i64::from(max_limit),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
