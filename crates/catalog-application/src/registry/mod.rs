//! Construction Layer
//!
//! Two passive components used by the composition root:
//!
//! | Component | Role |
//! |-----------|------|
//! | [`ServiceRegistry`] | Named store of already-built components |
//! | [`RecipeFactory`] | Builds a component from a [`Recipe`] and the registry |
//!
//! ## Bootstrap protocol
//!
//! ```text
//! 1. registry.register(foundations...)         db handle, table name
//! 2. factory.register_recipe(name, recipe)...  any order
//! 3. for name in dependency order:
//!        let c = factory.create(name)?;
//!        registry.register_component(name, c);
//! ```
//!
//! Ordering is the caller's responsibility. A missing dependency fails fast
//! with [`RegistryError::DependencyNotFound`]; nothing is built recursively.

pub mod error;
pub mod factory;
pub mod recipe;
pub mod service_registry;

pub use error::{BuildError, RegistryError, RegistryResult};
pub use factory::RecipeFactory;
pub use recipe::{Dependencies, Recipe};
pub use service_registry::{Component, ServiceRegistry};
