//! Recipes
//!
//! A recipe names the registry keys a component needs and carries the
//! builder that turns those resolved values into the component.

use super::error::{BuildError, RegistryError, RegistryResult};
use super::service_registry::{downcast, Component};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

type BuilderFn = dyn Fn(&Dependencies) -> Result<Component, BuildError> + Send + Sync;

/// Declared dependencies plus a builder
///
/// # Example
///
/// ```
/// use catalog_application::registry::{Dependencies, Recipe};
///
/// let recipe = Recipe::new(["db"], |deps: &Dependencies| {
///     let db: String = deps.get("db")?;
///     Ok(format!("repo({db})"))
/// });
/// assert_eq!(recipe.dependencies(), ["db"]);
/// ```
#[derive(Clone)]
pub struct Recipe {
    dependencies: Vec<String>,
    builder: Arc<BuilderFn>,
}

impl Recipe {
    /// Create a recipe whose builder produces a concrete `T`
    ///
    /// The value is wrapped into a [`Component`] after a successful build, so
    /// publishing it and resolving it back as `T` round-trips.
    pub fn new<I, S, T, F>(dependencies: I, builder: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        T: Any + Send + Sync,
        F: Fn(&Dependencies) -> Result<T, BuildError> + Send + Sync + 'static,
    {
        Self::from_component_builder(dependencies, move |deps| {
            builder(deps).map(|value| Arc::new(value) as Component)
        })
    }

    /// Create a recipe whose builder already returns a type-erased component
    pub fn from_component_builder<I, S, F>(dependencies: I, builder: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&Dependencies) -> Result<Component, BuildError> + Send + Sync + 'static,
    {
        Self {
            dependencies: dependencies.into_iter().map(Into::into).collect(),
            builder: Arc::new(builder),
        }
    }

    /// Registry keys this recipe needs, in declaration order
    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub(crate) fn build(&self, dependencies: &Dependencies) -> Result<Component, BuildError> {
        (self.builder)(dependencies)
    }
}

impl fmt::Debug for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Recipe")
            .field("dependencies", &self.dependencies)
            .finish_non_exhaustive()
    }
}

/// Fully resolved dependency set handed to a builder
///
/// Only the keys the recipe declared are present; asking for anything else
/// yields [`RegistryError::UndeclaredDependency`].
#[derive(Default, Clone)]
pub struct Dependencies {
    values: HashMap<String, Component>,
}

impl Dependencies {
    /// Narrow the dependency under `key` to `T`
    pub fn get<T>(&self, key: &str) -> RegistryResult<T>
    where
        T: Any + Clone,
    {
        let component = self
            .values
            .get(key)
            .ok_or_else(|| RegistryError::UndeclaredDependency {
                key: key.to_string(),
            })?;
        downcast(key, component)
    }

    /// Raw component under `key`
    pub fn component(&self, key: &str) -> Option<&Component> {
        self.values.get(key)
    }

    /// Whether `key` was resolved
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of resolved dependencies
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the recipe declared no dependencies
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn insert(&mut self, key: String, component: Component) {
        self.values.insert(key, component);
    }
}

impl FromIterator<(String, Component)> for Dependencies {
    fn from_iter<I: IntoIterator<Item = (String, Component)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl fmt::Debug for Dependencies {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut keys: Vec<&String> = self.values.keys().collect();
        keys.sort();
        f.debug_struct("Dependencies").field("keys", &keys).finish()
    }
}
