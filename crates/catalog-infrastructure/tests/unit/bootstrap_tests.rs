//! Composition root tests using the key-value store

use catalog_application::keys;
use catalog_application::registry::{Dependencies, Recipe, RecipeFactory, ServiceRegistry};
use catalog_application::use_cases::{
    AddProductInput, DeleteProductInput, GetProductInput, UpdateProductInput,
};
use catalog_domain::Error;
use catalog_infrastructure::config::AppConfig;
use catalog_infrastructure::di::{available_stores, build_and_publish, init_app};
use std::sync::Arc;

fn mug() -> AddProductInput {
    AddProductInput {
        id: "sku-1".into(),
        name: "Mug".into(),
        description: "Ceramic mug".into(),
        price: 9.5,
    }
}

#[tokio::test]
async fn init_app_publishes_every_layer() {
    let context = init_app(AppConfig::default()).await.unwrap();
    let registry = context.registry();

    for key in keys::REPOSITORY_KEYS
        .iter()
        .chain(&keys::DOMAIN_SERVICE_KEYS)
        .chain(&keys::USE_CASE_KEYS)
    {
        assert!(registry.contains(key), "{key} not published");
    }
}

#[tokio::test]
async fn context_keeps_the_loaded_configuration() {
    let mut config = AppConfig::default();
    config.server.port = 9191;

    let context = init_app(config.clone()).await.unwrap();

    assert_eq!(*context.config(), config);
    assert!(Arc::ptr_eq(&context.config(), &context.clone().config()));
}

#[tokio::test]
async fn use_cases_share_one_store() {
    let context = init_app(AppConfig::default()).await.unwrap();

    context.add_product().execute(mug()).await.unwrap();
    context
        .update_product()
        .execute(UpdateProductInput {
            id: "sku-1".into(),
            price: Some(11.0),
            ..Default::default()
        })
        .await
        .unwrap();

    let listed = context.get_all_products().execute().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].price, 11.0);

    context
        .delete_product()
        .execute(DeleteProductInput { id: "sku-1".into() })
        .await
        .unwrap();
    let err = context
        .get_product()
        .execute(GetProductInput { id: "sku-1".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, Error::NotFound));
}

#[tokio::test]
async fn separate_contexts_do_not_share_data() {
    let first = init_app(AppConfig::default()).await.unwrap();
    let second = init_app(AppConfig::default()).await.unwrap();

    first.add_product().execute(mug()).await.unwrap();
    assert!(second.get_all_products().execute().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_store_is_a_configuration_error() {
    let mut config = AppConfig::default();
    config.store.provider = "mongo".into();

    let err = init_app(config).await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[tokio::test]
async fn relational_store_without_url_fails_to_start() {
    let mut config = AppConfig::default();
    config.store.provider = "relational".into();

    let err = init_app(config).await.unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn both_stores_are_linked() {
    assert_eq!(available_stores(), ["keyvalue", "relational"]);
}

#[test]
fn build_and_publish_stops_at_the_first_failure() {
    let registry = Arc::new(ServiceRegistry::new());
    let factory = RecipeFactory::new(Arc::clone(&registry));
    factory.register_recipe(
        "A",
        Recipe::new(Vec::<String>::new(), |_: &Dependencies| Ok(1_u8)),
    );
    factory.register_recipe("B", Recipe::new(["missing"], |_: &Dependencies| Ok(2_u8)));
    factory.register_recipe(
        "C",
        Recipe::new(Vec::<String>::new(), |_: &Dependencies| Ok(3_u8)),
    );

    let err = build_and_publish(&factory, &["A", "B", "C"]).unwrap_err();

    assert!(matches!(err, Error::Bootstrap { .. }));
    assert!(err.to_string().contains("Failed to build B"));
    assert!(registry.contains("A"));
    assert!(!registry.contains("B"));
    assert!(!registry.contains("C"));
}
