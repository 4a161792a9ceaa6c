//! Key-value store
//!
//! Products are stored as JSON items keyed by their `"id"` attribute in a
//! table behind the [`KeyValueTable`] port. [`InMemoryTable`] is the bundled
//! backend.

pub mod entity;
pub mod recipes;
pub mod repository;
pub mod table;

pub use entity::ProductItem;
pub use repository::KeyValueProductRepository;
pub use table::{InMemoryTable, Item, KeyValueTable};
