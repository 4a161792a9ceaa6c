//! Application ports
//!
//! Product repository and service ports live in `catalog_domain::ports`.
//! This module holds the extension points owned by the application layer.

pub mod registry;

pub use registry::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry, list_store_providers,
    resolve_store_provider,
};
