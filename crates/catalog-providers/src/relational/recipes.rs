//! Relational store registration
//!
//! Foundations: `dbPool` holds the [`PgPool`] and `dbTableName` the table
//! name. The products table is created while the foundations are
//! registered.

use super::pool::{PgPool, create_pool, ensure_schema, validate_table_name};
use super::repository::RelationalProductRepository;
use crate::constants::{DB_POOL, DB_TABLE_NAME, DEFAULT_MAX_CONNECTIONS, DEFAULT_TABLE_NAME};
use catalog_application::keys;
use catalog_application::ports::registry::{
    STORE_PROVIDERS, StoreProviderConfig, StoreProviderEntry,
};
use catalog_application::registry::{
    BuildError, Dependencies, Recipe, RecipeFactory, ServiceRegistry,
};
use catalog_domain::error::{Error, Result};
use catalog_domain::ports::repositories::{
    ProductDeleteRepository, ProductFindAllRepository, ProductFindRepository,
    ProductSaveRepository,
};
use std::sync::Arc;
use tracing::info;

const DEPENDENCIES: [&str; 2] = [DB_POOL, DB_TABLE_NAME];

fn build_repository(
    deps: &Dependencies,
) -> std::result::Result<Arc<RelationalProductRepository>, BuildError> {
    let pool: PgPool = deps.get(DB_POOL)?;
    let table_name: String = deps.get(DB_TABLE_NAME)?;
    Ok(Arc::new(RelationalProductRepository::new(pool, &table_name)?))
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

/// Open the pool, create the table and register both foundations
///
/// Blocking: it talks to the database.
///
/// # Errors
///
/// [`Error::Configuration`] for a missing or malformed URL or table name,
/// [`Error::Repository`] when the schema cannot be created.
pub fn register_foundations(config: &StoreProviderConfig, registry: &ServiceRegistry) -> Result<()> {
    let url = config
        .database_url
        .as_deref()
        .filter(|url| !url.is_empty())
        .ok_or_else(|| Error::configuration("The relational store requires a database URL"))?;
    let table_name = config
        .table_name
        .clone()
        .unwrap_or_else(|| DEFAULT_TABLE_NAME.to_string());
    validate_table_name(&table_name)?;

    let pool = create_pool(url, config.max_connections.unwrap_or(DEFAULT_MAX_CONNECTIONS))?;
    ensure_schema(&pool, &table_name)?;
    info!(table = %table_name, "Using relational store");

    registry.register(DB_POOL, pool);
    registry.register(DB_TABLE_NAME, table_name);
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
static RELATIONAL_STORE: StoreProviderEntry = StoreProviderEntry {
    name: "relational",
    description: "PostgreSQL via an r2d2 connection pool",
    register_foundations,
    register_recipes,
};
