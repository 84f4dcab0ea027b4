//! HTTP route handlers.
//!
//! - [`products`] - The five catalog operations under `/products`
//! - [`health`] - Store health check

pub mod health;
pub mod products;
