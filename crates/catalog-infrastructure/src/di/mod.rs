//! Dependency wiring
//!
//! Everything here is composition: choosing the store and driving the
//! recipe factory. Business logic lives in the domain and application
//! crates.

pub mod bootstrap;
pub mod resolver;

pub use bootstrap::{AppContext, build_and_publish, init_app, register_all_recipes};
pub use resolver::{available_stores, resolve_store};
