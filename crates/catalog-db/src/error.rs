//! # Database and Catalog Error Types
//!
//! Error types for store operations and for the catalog service.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  SQLite Error (sqlx::Error)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  DbError ← Adds context and categorization                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError ← NotFound(id) raised by the service, DbError passed on  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in catalog-api) ← Mapped to an HTTP status                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use catalog_core::ValidationError;
use thiserror::Error;

/// Database operation errors.
///
/// These errors wrap sqlx errors and provide additional context
/// for debugging and for the HTTP boundary.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in database.
    ///
    /// ## When This Occurs
    /// - An update addressed an id with no row at all
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation.
    #[error("Duplicate {field}: '{value}' already exists")]
    UniqueViolation { field: String, value: String },

    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed (constraint or runtime SQL error).
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound    → DbError::NotFound
/// sqlx::Error::Database       → Analyze message for constraint type
/// sqlx::Error::PoolTimedOut   → DbError::PoolExhausted
/// Other                       → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::not_found("Record", "unknown"),

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports: "UNIQUE constraint failed: <table>.<column>"
                if let Some(field) = msg.strip_prefix("UNIQUE constraint failed: ") {
                    DbError::UniqueViolation {
                        field: field.to_string(),
                        value: "unknown".to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Catalog Error
// =============================================================================

/// Errors returned by [`ProductCatalogService`](crate::ProductCatalogService).
///
/// `NotFound` is the only failure the service raises on its own. Store
/// failures pass through unchanged inside `Store`.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No available product has this id (missing or soft-deleted).
    #[error("Product with ID {0} not found")]
    NotFound(i64),

    /// The request was rejected before reaching the store.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The store failed.
    #[error(transparent)]
    Store(#[from] DbError),
}

/// Result type for catalog service operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            CatalogError::NotFound(42).to_string(),
            "Product with ID 42 not found"
        );
        assert_eq!(
            DbError::not_found("Product", 7).to_string(),
            "Product not found: 7"
        );
    }

    #[test]
    fn test_store_errors_pass_through() {
        let err: CatalogError = DbError::PoolExhausted.into();
        assert!(matches!(err, CatalogError::Store(DbError::PoolExhausted)));
        assert_eq!(err.to_string(), "Connection pool exhausted");
    }

    #[test]
    fn test_pool_timeout_maps_to_exhausted() {
        let err: DbError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(err, DbError::PoolExhausted));
    }
}
