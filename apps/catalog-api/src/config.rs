//! Catalog API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use catalog_db::DbConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Catalog API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// HTTP server port
    pub http_port: u16,

    /// SQLite database file
    pub database_path: PathBuf,

    /// Maximum pooled connections
    pub db_max_connections: u32,

    /// Connection acquire timeout in seconds
    pub db_connect_timeout_secs: u64,

    /// Largest `limit` a list request may ask for
    pub pagination_max_limit: u32,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// `load` passes the process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CatalogConfig {
            http_port: parse_or(&lookup, "HTTP_PORT", 3000)?,

            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data/catalog.db")),

            db_max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,

            db_connect_timeout_secs: parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 30)?,

            pagination_max_limit: parse_or(
                &lookup,
                "PAGINATION_MAX_LIMIT",
                catalog_core::MAX_LIMIT,
            )?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("DB_MAX_CONNECTIONS".to_string()));
        }

        if config.pagination_max_limit == 0 {
            return Err(ConfigError::InvalidValue("PAGINATION_MAX_LIMIT".to_string()));
        }

        Ok(config)
    }

    /// Pool settings for [`catalog_db::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
            .max_connections(self.db_max_connections)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(self.db_connect_timeout_secs))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(pairs: &[(&str, &str)]) -> Result<CatalogConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CatalogConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();

        assert_eq!(config.http_port, 3000);
        assert_eq!(config.database_path, PathBuf::from("./data/catalog.db"));
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.db_connect_timeout_secs, 30);
        assert_eq!(config.pagination_max_limit, 100);
    }

    #[test]
    fn test_overrides() {
        let config = load_from(&[
            ("HTTP_PORT", "8080"),
            ("DATABASE_PATH", "/var/lib/catalog/catalog.db"),
            ("PAGINATION_MAX_LIMIT", "50"),
        ])
        .unwrap();

        assert_eq!(config.http_port, 8080);
        assert_eq!(config.pagination_max_limit, 50);

        let db = config.db_config();
        assert_eq!(db.database_path, PathBuf::from("/var/lib/catalog/catalog.db"));
        assert_eq!(db.max_connections, 5);
        assert_eq!(db.connect_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_values() {
        let err = load_from(&[("HTTP_PORT", "not-a-port")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for HTTP_PORT");

        let err = load_from(&[("PAGINATION_MAX_LIMIT", "0")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PAGINATION_MAX_LIMIT");
    }
}
