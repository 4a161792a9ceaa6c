//! Recipes for the use cases
//!
//! Use cases are published as `Arc<UseCase>` and each depends on exactly one
//! domain service capability.

use super::{
    AddProductUseCase, DeleteProductUseCase, GetAllProductsUseCase, GetProductUseCase,
    UpdateProductUseCase,
};
use crate::keys;
use crate::registry::{Dependencies, Recipe, RecipeFactory};
use catalog_domain::ports::services::{
    AllProductFinder, ProductAdder, ProductDeleter, ProductFinder, ProductUpdater,
};
use std::sync::Arc;

pub fn add_product_recipe() -> Recipe {
    Recipe::new([keys::PRODUCT_ADDER], |deps: &Dependencies| {
        let adder: Arc<dyn ProductAdder> = deps.get(keys::PRODUCT_ADDER)?;
        Ok(Arc::new(AddProductUseCase::new(adder)))
    })
}

pub fn get_product_recipe() -> Recipe {
    Recipe::new([keys::PRODUCT_FINDER], |deps: &Dependencies| {
        let finder: Arc<dyn ProductFinder> = deps.get(keys::PRODUCT_FINDER)?;
        Ok(Arc::new(GetProductUseCase::new(finder)))
    })
}

pub fn get_all_products_recipe() -> Recipe {
    Recipe::new([keys::ALL_PRODUCT_FINDER], |deps: &Dependencies| {
        let finder: Arc<dyn AllProductFinder> = deps.get(keys::ALL_PRODUCT_FINDER)?;
        Ok(Arc::new(GetAllProductsUseCase::new(finder)))
    })
}

pub fn update_product_recipe() -> Recipe {
    Recipe::new([keys::PRODUCT_UPDATER], |deps: &Dependencies| {
        let updater: Arc<dyn ProductUpdater> = deps.get(keys::PRODUCT_UPDATER)?;
        Ok(Arc::new(UpdateProductUseCase::new(updater)))
    })
}

pub fn delete_product_recipe() -> Recipe {
    Recipe::new([keys::PRODUCT_DELETER], |deps: &Dependencies| {
        let deleter: Arc<dyn ProductDeleter> = deps.get(keys::PRODUCT_DELETER)?;
        Ok(Arc::new(DeleteProductUseCase::new(deleter)))
    })
}

/// Register every use case recipe under its component key
pub fn register_recipes(factory: &RecipeFactory) {
    factory.register_recipe(keys::ADD_PRODUCT_USE_CASE, add_product_recipe());
    factory.register_recipe(keys::GET_PRODUCT_USE_CASE, get_product_recipe());
    factory.register_recipe(keys::GET_ALL_PRODUCTS_USE_CASE, get_all_products_recipe());
    factory.register_recipe(keys::UPDATE_PRODUCT_USE_CASE, update_product_recipe());
    factory.register_recipe(keys::DELETE_PRODUCT_USE_CASE, delete_product_recipe());
}
