//! Store Provider Registry
//!
//! Backing stores register themselves at link time through the `linkme`
//! distributed slice [`STORE_PROVIDERS`]. The bootstrap picks one by the
//! configured name and lets it seed the [`ServiceRegistry`] with its
//! foundational handles and the [`RecipeFactory`] with its repository
//! recipes.
//!
//! ```text
//! #[linkme::distributed_slice(STORE_PROVIDERS)]  ──►  STORE_PROVIDERS.iter()
//!                                                          │
//!        config.store.provider = "keyvalue"  ─────────────►┘
//! ```
//!
//! ## Registering a store (in catalog-providers)
//!
//! ```ignore
//! #[linkme::distributed_slice(STORE_PROVIDERS)]
//! static KEYVALUE_STORE: StoreProviderEntry = StoreProviderEntry {
//!     name: "keyvalue",
//!     description: "In-memory key-value table",
//!     register_foundations: keyvalue::register_foundations,
//!     register_recipes: keyvalue::register_recipes,
//! };
//! ```

use crate::registry::{RecipeFactory, ServiceRegistry};
use catalog_domain::error::{Error, Result};
use std::collections::HashMap;

/// Settings a store provider may need to create its foundations
///
/// Providers read what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct StoreProviderConfig {
    /// Provider name ("keyvalue", "relational")
    pub provider: String,
    /// Table (or key-value namespace) holding products
    pub table_name: Option<String>,
    /// Connection string for database-backed stores
    pub database_url: Option<String>,
    /// Upper bound on pooled connections
    pub max_connections: Option<u32>,
    /// Provider-specific extras
    pub extra: HashMap<String, String>,
}

impl StoreProviderConfig {
    /// Create a config for the named provider
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the table name
    pub fn with_table_name(mut self, table_name: impl Into<String>) -> Self {
        self.table_name = Some(table_name.into());
        self
    }

    /// Set the database URL
    pub fn with_database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Set the pool size
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = Some(max_connections);
        self
    }

    /// Add an extra setting
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for a backing store
pub struct StoreProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Registers the store's foundational handles (connections, table names)
    pub register_foundations: fn(&StoreProviderConfig, &ServiceRegistry) -> Result<()>,
    /// Registers one recipe per repository port
    pub register_recipes: fn(&RecipeFactory),
}

#[linkme::distributed_slice]
pub static STORE_PROVIDERS: [StoreProviderEntry] = [..];

/// Find the store provider named `name`
///
/// # Errors
///
/// [`Error::Configuration`] listing the available providers when no entry
/// matches.
pub fn resolve_store_provider(name: &str) -> Result<&'static StoreProviderEntry> {
    STORE_PROVIDERS
        .iter()
        .find(|entry| entry.name == name)
        .ok_or_else(|| {
            let available: Vec<&str> = STORE_PROVIDERS.iter().map(|e| e.name).collect();
            Error::configuration(format!(
                "Unknown store provider '{name}'. Available providers: {available:?}"
            ))
        })
}

/// All registered store providers as `(name, description)` pairs
pub fn list_store_providers() -> Vec<(&'static str, &'static str)> {
    STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
