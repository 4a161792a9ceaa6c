//! Key-value store registration
//!
//! Foundations: `keyValueTable` holds an `Arc<dyn KeyValueTable>` and
//! `keyValueTableName` the table name. Each repository recipe depends on
//! both.

use super::repository::KeyValueProductRepository;
use super::table::{InMemoryTable, KeyValueTable};
use crate::constants::{DEFAULT_TABLE_NAME, KEY_VALUE_TABLE, KEY_VALUE_TABLE_NAME};
use catalog_application::keys;
use catalog_application::ports::registry::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry,
};
use catalog_application::registry::{
    BuildError, Dependencies, Recipe, RecipeFactory, ServiceRegistry,
};
use catalog_domain::error::Result;
use catalog_domain::ports::repositories::{
    ProductDeleteRepository, ProductFindAllRepository, ProductFindRepository,
    ProductSaveRepository,
};
use std::sync::Arc;
use tracing::info;

const DEPENDENCIES: [&str; 2] = [KEY_VALUE_TABLE, KEY_VALUE_TABLE_NAME];

fn build_repository(
    deps: &Dependencies,
) -> std::result::Result<Arc<KeyValueProductRepository>, BuildError> {
    let table: Arc<dyn KeyValueTable> = deps.get(KEY_VALUE_TABLE)?;
    let table_name: String = deps.get(KEY_VALUE_TABLE_NAME)?;
    Ok(Arc::new(KeyValueProductRepository::new(table, table_name)))
}

pub fn save_repository_recipe() -> Recipe {
    Recipe::new(DEPENDENCIES, |deps: &Dependencies| {
        Ok(build_repository(deps)? as Arc<dyn ProductSaveRepository>)
    })
}

pub fn find_repository_recipe() -> Recipe {
    Recipe::new(DEPENDENCIES, |deps: &Dependencies| {
        Ok(build_repository(deps)? as Arc<dyn ProductFindRepository>)
    })
}

pub fn find_all_repository_recipe() -> Recipe {
    Recipe::new(DEPENDENCIES, |deps: &Dependencies| {
        Ok(build_repository(deps)? as Arc<dyn ProductFindAllRepository>)
    })
}

pub fn delete_repository_recipe() -> Recipe {
    Recipe::new(DEPENDENCIES, |deps: &Dependencies| {
        Ok(build_repository(deps)? as Arc<dyn ProductDeleteRepository>)
    })
}

/// Register a fresh in-memory table and the configured table name
pub fn register_foundations(config: &StoreProviderConfig, registry: &ServiceRegistry) -> Result<()> {
    let table_name = config
        .table_name
        .clone()
        .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
    info!(table = %table_name, "Using in-memory key-value store");

    registry.register(
        KEY_VALUE_TABLE,
        Arc::new(InMemoryTable::new()) as Arc<dyn KeyValueTable>,
    );
    registry.register(KEY_VALUE_TABLE_NAME, table_name);
    Ok(())
}

/// Register one recipe per repository port
pub fn register_recipes(factory: &RecipeFactory) {
    factory.register_recipe(keys::PRODUCT_SAVE_REPOSITORY, save_repository_recipe());
    factory.register_recipe(keys::PRODUCT_FIND_REPOSITORY, find_repository_recipe());
    factory.register_recipe(keys::PRODUCT_FIND_ALL_REPOSITORY, find_all_repository_recipe());
    factory.register_recipe(keys::PRODUCT_DELETE_REPOSITORY, delete_repository_recipe());
}

#[linkme::distributed_slice(STORE_PROVIDERS)]
static KEYVALUE_STORE: StoreProviderEntry = StoreProviderEntry {
    name: "keyvalue",
    description: "In-memory key-value table (non-persistent)",
    register_foundations,
    register_recipes,
};
