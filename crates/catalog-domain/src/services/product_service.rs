//! Product domain services
//!
//! Each capability is available as a narrow service that holds only the
//! repository ports it touches, which is what the recipe-based bootstrap
//! builds. [`ProductService`] bundles all of them over a full repository set
//! for callers that wire things by hand.

use crate::entities::Product;
use crate::error::{Error, Result};
use crate::ports::repositories::{
    ProductDeleteRepository, ProductFindAllRepository, ProductFindRepository,
    ProductSaveRepository,
};
use crate::ports::services::{
    AllProductFinder, ProductAdder, ProductChanges, ProductDeleter, ProductFinder, ProductUpdater,
};
use crate::value_objects::ProductId;
use async_trait::async_trait;
use std::sync::Arc;

async fn add_product(
    find: &dyn ProductFindRepository,
    save: &dyn ProductSaveRepository,
    id: ProductId,
    name: String,
    description: String,
    price: f64,
) -> Result<Product> {
    if find.find(&id).await?.is_some() {
        return Err(Error::AlreadyExists);
    }
    let product = Product::new(id, name, description, price)?;
    save.save(&product).await?;
    Ok(product)
}

async fn get_product(find: &dyn ProductFindRepository, id: &ProductId) -> Result<Product> {
    if id.is_empty() {
        return Err(Error::InvalidProductId);
    }
    find.find(id).await?.ok_or(Error::NotFound)
}

async fn update_product(
    find: &dyn ProductFindRepository,
    save: &dyn ProductSaveRepository,
    id: &ProductId,
    changes: ProductChanges,
) -> Result<Product> {
    let mut product = get_product(find, id).await?;

    if let Some(name) = changes.name {
        product.change_name(name)?;
    }
    if let Some(description) = changes.description {
        product.change_description(description)?;
    }
    if let Some(price) = changes.price {
        product.change_price(price)?;
    }

    save.save(&product).await?;
    Ok(product)
}

async fn delete_product(
    find: &dyn ProductFindRepository,
    delete: &dyn ProductDeleteRepository,
    id: &ProductId,
) -> Result<()> {
    let product = get_product(find, id).await?;
    delete.delete(&product.id).await
}

// ============================================================================
// Narrow services
// ============================================================================

/// Adds products; needs lookup and save
pub struct ProductAdderService {
    find: Arc<dyn ProductFindRepository>,
    save: Arc<dyn ProductSaveRepository>,
}

impl ProductAdderService {
    /// Create the service over its repositories
    pub fn new(find: Arc<dyn ProductFindRepository>, save: Arc<dyn ProductSaveRepository>) -> Self {
        Self { find, save }
    }
}

#[async_trait]
impl ProductAdder for ProductAdderService {
    async fn add_product(
        &self,
        id: ProductId,
        name: String,
        description: String,
        price: f64,
    ) -> Result<Product> {
        add_product(&*self.find, &*self.save, id, name, description, price).await
    }
}

/// Fetches one product
pub struct ProductFinderService {
    find: Arc<dyn ProductFindRepository>,
}

impl ProductFinderService {
    /// Create the service over its repository
    pub fn new(find: Arc<dyn ProductFindRepository>) -> Self {
        Self { find }
    }
}

#[async_trait]
impl ProductFinder for ProductFinderService {
    async fn get_product(&self, id: &ProductId) -> Result<Product> {
        get_product(&*self.find, id).await
    }
}

/// Lists every product
pub struct AllProductFinderService {
    find_all: Arc<dyn ProductFindAllRepository>,
}

impl AllProductFinderService {
    /// Create the service over its repository
    pub fn new(find_all: Arc<dyn ProductFindAllRepository>) -> Self {
        Self { find_all }
    }
}

#[async_trait]
impl AllProductFinder for AllProductFinderService {
    async fn get_all_products(&self) -> Result<Vec<Product>> {
        self.find_all.find_all().await
    }
}

/// Updates products; needs lookup and save
pub struct ProductUpdaterService {
    find: Arc<dyn ProductFindRepository>,
    save: Arc<dyn ProductSaveRepository>,
}

impl ProductUpdaterService {
    /// Create the service over its repositories
    pub fn new(find: Arc<dyn ProductFindRepository>, save: Arc<dyn ProductSaveRepository>) -> Self {
        Self { find, save }
    }
}

#[async_trait]
impl ProductUpdater for ProductUpdaterService {
    async fn update_product(&self, id: &ProductId, changes: ProductChanges) -> Result<Product> {
        update_product(&*self.find, &*self.save, id, changes).await
    }
}

/// Deletes products; needs lookup and delete
pub struct ProductDeleterService {
    find: Arc<dyn ProductFindRepository>,
    delete: Arc<dyn ProductDeleteRepository>,
}

impl ProductDeleterService {
    /// Create the service over its repositories
    pub fn new(
        find: Arc<dyn ProductFindRepository>,
        delete: Arc<dyn ProductDeleteRepository>,
    ) -> Self {
        Self { find, delete }
    }
}

#[async_trait]
impl ProductDeleter for ProductDeleterService {
    async fn delete_product(&self, id: &ProductId) -> Result<()> {
        delete_product(&*self.find, &*self.delete, id).await
    }
}

// ============================================================================
// Full service
// ============================================================================

/// All catalog capabilities over one set of repositories
pub struct ProductService {
    save: Arc<dyn ProductSaveRepository>,
    find: Arc<dyn ProductFindRepository>,
    find_all: Arc<dyn ProductFindAllRepository>,
    delete: Arc<dyn ProductDeleteRepository>,
}

impl ProductService {
    /// Create the service from one repository per operation
    pub fn new(
        save: Arc<dyn ProductSaveRepository>,
        find: Arc<dyn ProductFindRepository>,
        find_all: Arc<dyn ProductFindAllRepository>,
        delete: Arc<dyn ProductDeleteRepository>,
    ) -> Self {
        Self {
            save,
            find,
            find_all,
            delete,
        }
    }
}

#[async_trait]
impl ProductAdder for ProductService {
    async fn add_product(
        &self,
        id: ProductId,
        name: String,
        description: String,
        price: f64,
    ) -> Result<Product> {
        add_product(&*self.find, &*self.save, id, name, description, price).await
    }
}

#[async_trait]
impl ProductFinder for ProductService {
    async fn get_product(&self, id: &ProductId) -> Result<Product> {
        get_product(&*self.find, id).await
    }
}

#[async_trait]
impl AllProductFinder for ProductService {
    async fn get_all_products(&self) -> Result<Vec<Product>> {
        self.find_all.find_all().await
    }
}

#[async_trait]
impl ProductUpdater for ProductService {
    async fn update_product(&self, id: &ProductId, changes: ProductChanges) -> Result<Product> {
        update_product(&*self.find, &*self.save, id, changes).await
    }
}

#[async_trait]
impl ProductDeleter for ProductService {
    async fn delete_product(&self, id: &ProductId) -> Result<()> {
        delete_product(&*self.find, &*self.delete, id).await
    }
}
