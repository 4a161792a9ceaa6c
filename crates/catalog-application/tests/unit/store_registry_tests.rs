//! Tests for the store provider registry

use catalog_application::ports::registry::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry, list_store_providers,
    resolve_store_provider,
};
use catalog_application::registry::{RecipeFactory, ServiceRegistry};
use catalog_domain::{Error, Result};
use std::sync::Arc;

fn register_test_foundations(config: &StoreProviderConfig, registry: &ServiceRegistry) -> Result<()> {
    let table = config
        .table_name
        .clone()
        .ok_or_else(|| Error::configuration("table name required"))?;
    registry.register("testTable", table);
    Ok(())
}

fn register_no_recipes(_: &RecipeFactory) {}

#[linkme::distributed_slice(STORE_PROVIDERS)]
static TEST_STORE: StoreProviderEntry = StoreProviderEntry {
    name: "test-store",
    description: "Store used by the unit tests",
    register_foundations: register_test_foundations,
    register_recipes: register_no_recipes,
};

#[test]
fn lists_registered_stores() {
    assert!(list_store_providers().contains(&("test-store", "Store used by the unit tests")));
}

#[test]
fn resolves_store_by_name() {
    let entry = resolve_store_provider("test-store").unwrap();
    let registry = Arc::new(ServiceRegistry::new());
    let config = StoreProviderConfig::new("test-store").with_table_name("products");

    (entry.register_foundations)(&config, &registry).unwrap();
    let table: String = registry.resolve_as("testTable").unwrap();
    assert_eq!(table, "products");
}

#[test]
fn foundation_errors_propagate() {
    let entry = resolve_store_provider("test-store").unwrap();
    let registry = ServiceRegistry::new();

    let err = (entry.register_foundations)(&StoreProviderConfig::new("test-store"), &registry)
        .unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn unknown_store_lists_alternatives() {
    let err = resolve_store_provider("mongo").err().unwrap();
    let message = err.to_string();

    assert!(message.contains("mongo"));
    assert!(message.contains("test-store"));
}

#[test]
fn config_builder() {
    let config = StoreProviderConfig::new("relational")
        .with_database_url("postgres://localhost/catalog")
        .with_max_connections(4)
        .with_extra("sslmode", "disable");

    assert_eq!(config.provider, "relational");
    assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/catalog"));
    assert_eq!(config.max_connections, Some(4));
    assert_eq!(config.extra.get("sslmode").map(String::as_str), Some("disable"));
}
