//! Composition Root
//!
//! Builds the whole object graph with the recipe-based construction layer:
//!
//! ```text
//! AppConfig ──► store entry (linkme) ──► foundations ──► ServiceRegistry
//!                     │                                        ▲
//!                     ▼                                        │ publish
//!            repository recipes ─┐                             │
//!        domain service recipes ─┼─► RecipeFactory ── create ──┘
//!              use case recipes ─┘
//! ```
//!
//! Components are built layer by layer (repositories, then domain services,
//! then use cases) and each one is published before the next layer is
//! built, since the factory only resolves already-registered components.

use crate::config::AppConfig;
use crate::di::resolver::resolve_store;
use crate::error_ext::ErrorContext;
use catalog_application::keys;
use catalog_application::registry::{RecipeFactory, ServiceRegistry};
use catalog_application::use_cases::{
    AddProductUseCase, DeleteProductUseCase, GetAllProductsUseCase, GetProductUseCase,
    UpdateProductUseCase,
};
use catalog_application::{domain_services, use_cases};
use catalog_domain::error::Result;
use std::sync::Arc;
use tracing::{debug, info};

/// Built application: configuration, registry and the five use cases
#[derive(Clone)]
pub struct AppContext {
    config: Arc<AppConfig>,
    registry: Arc<ServiceRegistry>,
    add_product: Arc<AddProductUseCase>,
    get_product: Arc<GetProductUseCase>,
    get_all_products: Arc<GetAllProductsUseCase>,
    update_product: Arc<UpdateProductUseCase>,
    delete_product: Arc<DeleteProductUseCase>,
}

impl AppContext {
    /// Pick the use cases out of a fully built registry
    ///
    /// # Errors
    ///
    /// [`Error::Bootstrap`](catalog_domain::Error::Bootstrap) when a use case
    /// key is missing or holds something else.
    pub fn from_registry(config: AppConfig, registry: Arc<ServiceRegistry>) -> Result<Self> {
        Ok(Self {
            add_product: registry
                .resolve_as(keys::ADD_PRODUCT_USE_CASE)
                .bootstrap_context("Add product use case unavailable")?,
            get_product: registry
                .resolve_as(keys::GET_PRODUCT_USE_CASE)
                .bootstrap_context("Get product use case unavailable")?,
            get_all_products: registry
                .resolve_as(keys::GET_ALL_PRODUCTS_USE_CASE)
                .bootstrap_context("Get all products use case unavailable")?,
            update_product: registry
                .resolve_as(keys::UPDATE_PRODUCT_USE_CASE)
                .bootstrap_context("Update product use case unavailable")?,
            delete_product: registry
                .resolve_as(keys::DELETE_PRODUCT_USE_CASE)
                .bootstrap_context("Delete product use case unavailable")?,
            config: Arc::new(config),
            registry,
        })
    }

    /// Configuration the context was built from
    pub fn config(&self) -> Arc<AppConfig> {
        Arc::clone(&self.config)
    }

    /// Registry holding every published component
    pub fn registry(&self) -> Arc<ServiceRegistry> {
        Arc::clone(&self.registry)
    }

    /// Use case behind `POST /products`
    pub fn add_product(&self) -> Arc<AddProductUseCase> {
        Arc::clone(&self.add_product)
    }

    /// Use case behind `GET /products/{id}`
    pub fn get_product(&self) -> Arc<GetProductUseCase> {
        Arc::clone(&self.get_product)
    }

    /// Use case behind `GET /products`
    pub fn get_all_products(&self) -> Arc<GetAllProductsUseCase> {
        Arc::clone(&self.get_all_products)
    }

    /// Use case behind `PUT` and `PATCH /products/{id}`
    pub fn update_product(&self) -> Arc<UpdateProductUseCase> {
        Arc::clone(&self.update_product)
    }

    /// Use case behind `DELETE /products/{id}`
    pub fn delete_product(&self) -> Arc<DeleteProductUseCase> {
        Arc::clone(&self.delete_product)
    }
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Build each named component and publish it under the same name
///
/// Stops at the first failure; components published before it stay
/// registered.
///
/// # Errors
///
/// [`Error::Bootstrap`](catalog_domain::Error::Bootstrap) wrapping the
/// factory error for the failing key.
pub fn build_and_publish(factory: &RecipeFactory, names: &[&str]) -> Result<()> {
    for name in names {
        let component = factory
            .create(name)
            .bootstrap_context(format!("Failed to build {name}"))?;
        factory.registry().register_component(*name, component);
        debug!(component = %name, "Published component");
    }
    Ok(())
}

/// Register every recipe the application needs on `factory`
///
/// The store's repository recipes come from `register_store_recipes`.
pub fn register_all_recipes(factory: &RecipeFactory, register_store_recipes: fn(&RecipeFactory)) {
    register_store_recipes(factory);
    domain_services::recipes::register_recipes(factory);
    use_cases::recipes::register_recipes(factory);
}

/// Build the application for `config`
///
/// The store's foundations are registered on the blocking pool since they
/// may open database connections.
///
/// # Errors
///
/// - [`Error::Configuration`](catalog_domain::Error::Configuration) for an
///   unknown store or invalid store settings.
/// - [`Error::Bootstrap`](catalog_domain::Error::Bootstrap) when a
///   component cannot be built.
/// - Whatever the store reports while creating its foundations.
pub async fn init_app(config: AppConfig) -> Result<AppContext> {
    let store = resolve_store(&config.store)?;
    info!(store = store.name, "Initializing catalog");

    let registry = Arc::new(ServiceRegistry::new());
    let provider_config = config.store.to_provider_config();
    let foundations_registry = Arc::clone(&registry);
    tokio::task::spawn_blocking(move || {
        (store.register_foundations)(&provider_config, &foundations_registry)
    })
    .await
    .bootstrap_context("Store initialization task failed")??;

    let factory = RecipeFactory::new(Arc::clone(&registry));
    register_all_recipes(&factory, store.register_recipes);

    build_and_publish(&factory, &keys::REPOSITORY_KEYS)?;
    build_and_publish(&factory, &keys::DOMAIN_SERVICE_KEYS)?;
    build_and_publish(&factory, &keys::USE_CASE_KEYS)?;

    let context = AppContext::from_registry(config, registry)?;
    info!(components = context.registry.len(), "Catalog initialized");
    Ok(context)
}
