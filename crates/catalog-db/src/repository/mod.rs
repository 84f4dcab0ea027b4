//! # Repository Module
//!
//! Database implementations of the store traits.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ProductCatalogService                                                 │
//! │       │                                                                 │
//! │       │  store.find_unique(id, ProductFilter::available())             │
//! │       ▼                                                                 │
//! │  SqliteProductStore                                                    │
//! │  ├── create(&self, input)                                              │
//! │  ├── count(&self, filter)                                              │
//! │  ├── find_many(&self, filter, skip, take)                              │
//! │  ├── find_unique(&self, id, filter)                                    │
//! │  └── update(&self, id, changes)                                        │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;
