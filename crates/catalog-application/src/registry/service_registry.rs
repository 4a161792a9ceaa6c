//! Service Registry
//!
//! Flat, thread-safe namespace of already-built components. Values are
//! stored type-erased; typed access goes through [`ServiceRegistry::resolve_as`]
//! which reports a [`RegistryError::TypeMismatch`] naming the key and the
//! expected type instead of failing somewhere inside a builder.
//!
//! ## Locking
//!
//! A single `RwLock` guards the map. Lookups share the read lock; a
//! registration takes the write lock only for the insert. Guards are never
//! held across caller code.

use super::error::{RegistryError, RegistryResult};
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::debug;

/// Type-erased shared component
pub type Component = Arc<dyn Any + Send + Sync>;

/// Named store of constructed components
///
/// # Example
///
/// ```
/// use catalog_application::registry::ServiceRegistry;
///
/// let registry = ServiceRegistry::new();
/// registry.register("table", "products".to_string());
///
/// let table: String = registry.resolve_as("table").unwrap();
/// assert_eq!(table, "products");
/// assert!(registry.resolve("missing").is_none());
/// ```
#[derive(Default)]
pub struct ServiceRegistry {
    entries: RwLock<HashMap<String, Component>>,
}

impl ServiceRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`, replacing any previous value
    ///
    /// A value that is already a [`Component`], such as the output of
    /// [`RecipeFactory::create`](super::RecipeFactory::create), is stored as
    /// is; anything else is wrapped in a fresh one.
    pub fn register<T>(&self, key: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        let component: Component = match (&value as &dyn Any).downcast_ref::<Component>() {
            Some(component) => Arc::clone(component),
            None => Arc::new(value),
        };
        self.register_component(key, component);
    }

    /// Store an already type-erased component under `key`
    pub fn register_component(&self, key: impl Into<String>, component: Component) {
        let key = key.into();
        let replaced = self.write().insert(key.clone(), component).is_some();
        debug!(key = %key, replaced, "Registered component");
    }

    /// Look up the component stored under `key`
    ///
    /// `None` means the key was never registered.
    pub fn resolve(&self, key: &str) -> Option<Component> {
        self.read().get(key).cloned()
    }

    /// Look up `key` and narrow it to `T`
    ///
    /// `T` is the exact type that was registered; for trait objects that is
    /// usually `Arc<dyn Trait>`.
    pub fn resolve_as<T>(&self, key: &str) -> RegistryResult<T>
    where
        T: Any + Clone,
    {
        let component = self.resolve(key).ok_or_else(|| RegistryError::NotFound {
            key: key.to_string(),
        })?;
        downcast(key, &component)
    }

    /// Whether `key` has been registered
    pub fn contains(&self, key: &str) -> bool {
        self.read().contains_key(key)
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.read().keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Number of registered components
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// True when nothing has been registered
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every mutation is a single insert, so a poisoned map is still consistent.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Component>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Component>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

/// Narrow a component to `T`, reporting the key on mismatch
pub(crate) fn downcast<T>(key: &str, component: &Component) -> RegistryResult<T>
where
    T: Any + Clone,
{
    (**component)
        .downcast_ref::<T>()
        .cloned()
        .ok_or_else(|| RegistryError::TypeMismatch {
            key: key.to_string(),
            expected: type_name::<T>(),
        })
}
