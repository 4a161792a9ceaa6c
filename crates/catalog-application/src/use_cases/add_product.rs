//! Add Product Use Case

use super::dto::{AddProductInput, ProductOutput};
use catalog_domain::error::Result;
use catalog_domain::ports::services::ProductAdder;
use catalog_domain::value_objects::ProductId;
use std::sync::Arc;
use tracing::info;

/// Registers a new product in the catalog
pub struct AddProductUseCase {
    adder: Arc<dyn ProductAdder>,
}

impl AddProductUseCase {
    pub fn new(adder: Arc<dyn ProductAdder>) -> Self {
        Self { adder }
    }

    /// Add the product described by `input`
    ///
    /// # Errors
    ///
    /// Validation errors for empty fields or a non-positive price,
    /// `AlreadyExists` when the id is taken, and repository failures.
    pub async fn execute(&self, input: AddProductInput) -> Result<ProductOutput> {
        let product = self
            .adder
            .add_product(
                ProductId::new(input.id),
                input.name,
                input.description,
                input.price,
            )
            .await?;
        info!(product_id = %product.id, "Product added");
        Ok(ProductOutput::from(product))
    }
}
