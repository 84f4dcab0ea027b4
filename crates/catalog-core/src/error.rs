//! # Error Types
//!
//! Validation errors raised at the boundary before the catalog service runs.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  catalog-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  catalog-db errors (separate crate)                                    │
//! │  ├── DbError          - Database operation failures                    │
//! │  └── CatalogError     - NotFound(id) + wrapped store/validation errors │
//! │                                                                         │
//! │  catalog-api errors (in app)                                           │
//! │  └── ApiError         - What HTTP clients see (JSON)                   │
//! │                                                                         │
//! │  Flow: ValidationError → CatalogError → ApiError → HTTP response       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Input validation errors.
///
/// These errors occur when request input doesn't meet requirements.
/// Used for early validation before any store call runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., NaN price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Unit Tests
// =============================================================================
