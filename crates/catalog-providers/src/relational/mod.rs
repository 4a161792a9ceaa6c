//! Relational store
//!
//! PostgreSQL through an `r2d2` pool of synchronous `postgres` clients.
//! Queries run on tokio's blocking pool so repository futures never block
//! the async executor.

pub mod pool;
pub mod recipes;
pub mod repository;
pub mod row;

pub use pool::{PgPool, create_pool, ensure_schema, validate_table_name};
pub use repository::RelationalProductRepository;
pub use row::{ProductRow, Statements};
