//! # Application Layer
//!
//! Use cases, the construction layer that wires them, and the store
//! provider registry.
//!
//! ## Architecture
//!
//! ```text
//! catalog-server ──► use_cases ──► catalog_domain::ports::services
//!                        ▲                      ▲
//!                        │ built by             │ implemented by
//!                   registry::RecipeFactory ◄── domain_services::recipes
//!                        ▲
//!                        │ repository recipes
//!              ports::registry::STORE_PROVIDERS (catalog-providers)
//! ```

pub mod constants;
pub mod domain_services;
pub mod keys;
pub mod ports;
pub mod registry;
pub mod use_cases;

pub use registry::{Dependencies, Recipe, RecipeFactory, RegistryError, ServiceRegistry};
