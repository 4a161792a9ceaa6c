//! Recipe-Based Factory
//!
//! Builds a named component by resolving its recipe's declared dependencies
//! straight from the [`ServiceRegistry`] and invoking the builder.
//!
//! ```text
//! register_recipe("Repo", ["db"])      create("Repo")
//!              │                            │
//!              ▼                            ▼
//!        recipes["Repo"] ──► resolve "db" from registry ──► builder({db}) ──► Component
//! ```
//!
//! Resolution is single-level: a dependency that only exists as a recipe is
//! *missing*, and the factory never calls `create` on the caller's behalf.
//! Building and publishing are separate steps; the result of `create` is not
//! registered anywhere.

use super::error::{RegistryError, RegistryResult};
use super::recipe::{Dependencies, Recipe};
use super::service_registry::{downcast, Component, ServiceRegistry};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Executes recipes against a registry
///
/// # Example
///
/// ```
/// use catalog_application::registry::{Dependencies, Recipe, RecipeFactory, ServiceRegistry};
/// use std::sync::Arc;
///
/// let registry = Arc::new(ServiceRegistry::new());
/// let factory = RecipeFactory::new(registry.clone());
///
/// factory.register_recipe(
///     "Repo",
///     Recipe::new(["db"], |deps: &Dependencies| {
///         let db: String = deps.get("db")?;
///         Ok(format!("repo({db})"))
///     }),
/// );
///
/// assert!(factory.create("Repo").is_err());
/// registry.register("db", "conn".to_string());
/// let repo: String = factory.create_as("Repo").unwrap();
/// assert_eq!(repo, "repo(conn)");
/// ```
pub struct RecipeFactory {
    registry: Arc<ServiceRegistry>,
    recipes: RwLock<HashMap<String, Recipe>>,
}

impl RecipeFactory {
    /// Create a factory that resolves dependencies from `registry`
    pub fn new(registry: Arc<ServiceRegistry>) -> Self {
        Self {
            registry,
            recipes: RwLock::new(HashMap::new()),
        }
    }

    /// The registry dependencies are resolved from
    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    /// Store `recipe` under `name`, replacing any previous recipe
    pub fn register_recipe(&self, name: impl Into<String>, recipe: Recipe) {
        let name = name.into();
        debug!(recipe = %name, dependencies = ?recipe.dependencies(), "Registered recipe");
        self.recipes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name, recipe);
    }

    /// Whether a recipe is registered under `name`
    pub fn has_recipe(&self, name: &str) -> bool {
        self.recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Registered recipe names in sorted order
    pub fn recipe_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Build a fresh component from the recipe registered under `name`
    ///
    /// # Errors
    ///
    /// - [`RegistryError::RecipeNotFound`] when no recipe is registered.
    /// - [`RegistryError::DependencyNotFound`] for the first declared key the
    ///   registry does not hold; the builder is not invoked.
    /// - [`RegistryError::Builder`] wrapping whatever the builder returned.
    pub fn create(&self, name: &str) -> RegistryResult<Component> {
        let recipe = self
            .recipes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::RecipeNotFound {
                name: name.to_string(),
            })?;

        let mut dependencies = Dependencies::default();
        for key in recipe.dependencies() {
            let component =
                self.registry
                    .resolve(key)
                    .ok_or_else(|| RegistryError::DependencyNotFound {
                        recipe: name.to_string(),
                        key: key.clone(),
                    })?;
            dependencies.insert(key.clone(), component);
        }

        let component = recipe
            .build(&dependencies)
            .map_err(|source| RegistryError::Builder {
                recipe: name.to_string(),
                source,
            })?;

        debug!(recipe = %name, "Built component");
        Ok(component)
    }

    /// Build the component under `name` and narrow it to `T`
    pub fn create_as<T>(&self, name: &str) -> RegistryResult<T>
    where
        T: Any + Clone,
    {
        let component = self.create(name)?;
        downcast(name, &component)
    }
}

impl fmt::Debug for RecipeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecipeFactory")
            .field("recipes", &self.recipe_names())
            .field("registry", &self.registry)
            .finish()
    }
}
