//! Value objects
//!
//! Immutable values identified by their content rather than by identity.

mod product_id;

pub use product_id::ProductId;
