//! Store resolution
//!
//! Bridges the configured store name to the linkme store registry.

use crate::config::StoreConfig;
use catalog_application::ports::registry::{
    StoreProviderEntry, list_store_providers, resolve_store_provider,
};
use catalog_domain::error::Result;

/// The registered store named by `config.provider`
pub fn resolve_store(config: &StoreConfig) -> Result<&'static StoreProviderEntry> {
    resolve_store_provider(&config.provider)
}

/// Names of every linked store, sorted
pub fn available_stores() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = list_store_providers()
        .into_iter()
        .map(|(name, _)| name)
        .collect();
    names.sort_unstable();
    names
}
