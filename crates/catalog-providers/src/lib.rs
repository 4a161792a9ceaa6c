//! # Catalog Stores
//!
//! Repository implementations for the catalog's product ports. Each store
//! registers itself into `catalog_application::ports::registry::STORE_PROVIDERS`
//! and contributes one recipe per repository port.
//!
//! | Store | Foundations | Backend |
//! |-------|-------------|---------|
//! | `keyvalue` | `keyValueTable`, `keyValueTableName` | [`keyvalue::KeyValueTable`] (in-memory via `dashmap`) |
//! | `relational` | `dbPool`, `dbTableName` | PostgreSQL via `r2d2_postgres` |
//!
//! Linking this crate is enough to make both stores resolvable by name.

pub use catalog_domain::error::{Error, Result};

pub mod constants;
pub mod keyvalue;
pub mod relational;
