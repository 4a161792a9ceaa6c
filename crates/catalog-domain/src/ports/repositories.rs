//! Repository ports
//!
//! Persistence is split into one narrow trait per operation so a domain
//! service only depends on what it actually calls. Store adapters usually
//! implement all four and are exposed through [`ProductRepository`].

use crate::entities::Product;
use crate::error::Result;
use crate::value_objects::ProductId;
use async_trait::async_trait;

/// Insert-or-replace persistence
#[async_trait]
pub trait ProductSaveRepository: Send + Sync {
    /// Store the product, replacing any product with the same id
    async fn save(&self, product: &Product) -> Result<()>;
}

/// Lookup by identifier
#[async_trait]
pub trait ProductFindRepository: Send + Sync {
    /// Return the product with `id`, or `None` when absent
    async fn find(&self, id: &ProductId) -> Result<Option<Product>>;
}

/// Full listing
#[async_trait]
pub trait ProductFindAllRepository: Send + Sync {
    /// Return every stored product
    async fn find_all(&self) -> Result<Vec<Product>>;
}

/// Removal by identifier
#[async_trait]
pub trait ProductDeleteRepository: Send + Sync {
    /// Remove the product with `id`; removing an absent id is not an error
    async fn delete(&self, id: &ProductId) -> Result<()>;
}

/// Union of all product persistence operations
pub trait ProductRepository:
    ProductSaveRepository + ProductFindRepository + ProductFindAllRepository + ProductDeleteRepository
{
}

impl<T> ProductRepository for T where
    T: ProductSaveRepository
        + ProductFindRepository
        + ProductFindAllRepository
        + ProductDeleteRepository
{
}
