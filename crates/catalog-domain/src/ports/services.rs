//! Domain service ports
//!
//! One trait per catalog capability. [`crate::services::ProductService`]
//! implements all of them; the construction layer publishes each under its
//! own component key so use cases only receive the capability they need.

use crate::entities::Product;
use crate::error::Result;
use crate::value_objects::ProductId;
use async_trait::async_trait;

/// Changes requested for an existing product
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductChanges {
    /// New name
    pub name: Option<String>,
    /// New description
    pub description: Option<String>,
    /// New price
    pub price: Option<f64>,
}

/// Registers new products
#[async_trait]
pub trait ProductAdder: Send + Sync {
    /// Validate and store a new product
    async fn add_product(
        &self,
        id: ProductId,
        name: String,
        description: String,
        price: f64,
    ) -> Result<Product>;
}

/// Looks up a single product
#[async_trait]
pub trait ProductFinder: Send + Sync {
    /// Fetch the product with `id`
    async fn get_product(&self, id: &ProductId) -> Result<Product>;
}

/// Lists the catalog
#[async_trait]
pub trait AllProductFinder: Send + Sync {
    /// Fetch every product
    async fn get_all_products(&self) -> Result<Vec<Product>>;
}

/// Modifies existing products
#[async_trait]
pub trait ProductUpdater: Send + Sync {
    /// Apply `changes` to the product with `id`
    async fn update_product(&self, id: &ProductId, changes: ProductChanges) -> Result<Product>;
}

/// Removes products
#[async_trait]
pub trait ProductDeleter: Send + Sync {
    /// Delete the product with `id`
    async fn delete_product(&self, id: &ProductId) -> Result<()>;
}
