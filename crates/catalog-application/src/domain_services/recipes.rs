//! Recipes for the product domain services
//!
//! Each service is published as `Arc<dyn Capability>` and depends only on
//! the repository ports it uses.

use crate::keys;
use crate::registry::{Dependencies, Recipe, RecipeFactory};
use catalog_domain::ports::repositories::{
    ProductDeleteRepository, ProductFindAllRepository, ProductFindRepository,
    ProductSaveRepository,
};
use catalog_domain::ports::services::{
    AllProductFinder, ProductAdder, ProductDeleter, ProductFinder, ProductUpdater,
};
use catalog_domain::services::{
    AllProductFinderService, ProductAdderService, ProductDeleterService, ProductFinderService,
    ProductUpdaterService,
};
use std::sync::Arc;

/// Recipe for `Arc<dyn ProductAdder>`
pub fn product_adder_recipe() -> Recipe {
    Recipe::new(
        [keys::PRODUCT_FIND_REPOSITORY, keys::PRODUCT_SAVE_REPOSITORY],
        |deps: &Dependencies| {
            let find: Arc<dyn ProductFindRepository> = deps.get(keys::PRODUCT_FIND_REPOSITORY)?;
            let save: Arc<dyn ProductSaveRepository> = deps.get(keys::PRODUCT_SAVE_REPOSITORY)?;
            Ok(Arc::new(ProductAdderService::new(find, save)) as Arc<dyn ProductAdder>)
        },
    )
}

/// Recipe for `Arc<dyn ProductFinder>`
pub fn product_finder_recipe() -> Recipe {
    Recipe::new([keys::PRODUCT_FIND_REPOSITORY], |deps: &Dependencies| {
        let find: Arc<dyn ProductFindRepository> = deps.get(keys::PRODUCT_FIND_REPOSITORY)?;
        Ok(Arc::new(ProductFinderService::new(find)) as Arc<dyn ProductFinder>)
    })
}

/// Recipe for `Arc<dyn AllProductFinder>`
pub fn all_product_finder_recipe() -> Recipe {
    Recipe::new([keys::PRODUCT_FIND_ALL_REPOSITORY], |deps: &Dependencies| {
        let find_all: Arc<dyn ProductFindAllRepository> =
            deps.get(keys::PRODUCT_FIND_ALL_REPOSITORY)?;
        Ok(Arc::new(AllProductFinderService::new(find_all)) as Arc<dyn AllProductFinder>)
    })
}

/// Recipe for `Arc<dyn ProductUpdater>`
pub fn product_updater_recipe() -> Recipe {
    Recipe::new(
        [keys::PRODUCT_FIND_REPOSITORY, keys::PRODUCT_SAVE_REPOSITORY],
        |deps: &Dependencies| {
            let find: Arc<dyn ProductFindRepository> = deps.get(keys::PRODUCT_FIND_REPOSITORY)?;
            let save: Arc<dyn ProductSaveRepository> = deps.get(keys::PRODUCT_SAVE_REPOSITORY)?;
            Ok(Arc::new(ProductUpdaterService::new(find, save)) as Arc<dyn ProductUpdater>)
        },
    )
}

/// Recipe for `Arc<dyn ProductDeleter>`
pub fn product_deleter_recipe() -> Recipe {
    Recipe::new(
        [keys::PRODUCT_FIND_REPOSITORY, keys::PRODUCT_DELETE_REPOSITORY],
        |deps: &Dependencies| {
            let find: Arc<dyn ProductFindRepository> = deps.get(keys::PRODUCT_FIND_REPOSITORY)?;
            let delete: Arc<dyn ProductDeleteRepository> =
                deps.get(keys::PRODUCT_DELETE_REPOSITORY)?;
            Ok(Arc::new(ProductDeleterService::new(find, delete)) as Arc<dyn ProductDeleter>)
        },
    )
}

/// Register every domain service recipe under its component key
pub fn register_recipes(factory: &RecipeFactory) {
    factory.register_recipe(keys::PRODUCT_ADDER, product_adder_recipe());
    factory.register_recipe(keys::PRODUCT_FINDER, product_finder_recipe());
    factory.register_recipe(keys::ALL_PRODUCT_FINDER, all_product_finder_recipe());
    factory.register_recipe(keys::PRODUCT_UPDATER, product_updater_recipe());
    factory.register_recipe(keys::PRODUCT_DELETER, product_deleter_recipe());
}
