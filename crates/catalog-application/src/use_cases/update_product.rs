//! Update Product Use Case

use super::dto::{ProductOutput, UpdateProductInput};
use catalog_domain::error::Result;
use catalog_domain::ports::services::ProductUpdater;
use catalog_domain::value_objects::ProductId;
use std::sync::Arc;
use tracing::info;

/// Applies partial changes to an existing product
pub struct UpdateProductUseCase {
    updater: Arc<dyn ProductUpdater>,
}

impl UpdateProductUseCase {
    pub fn new(updater: Arc<dyn ProductUpdater>) -> Self {
        Self { updater }
    }

    /// Update the product named by `input.id`
    ///
    /// Only the fields present in `input` are changed. Each one is validated
    /// the same way as on creation.
    pub async fn execute(&self, input: UpdateProductInput) -> Result<ProductOutput> {
        let changes = input.changes();
        let product = self
            .updater
            .update_product(&ProductId::new(input.id), changes)
            .await?;
        info!(product_id = %product.id, "Product updated");
        Ok(ProductOutput::from(product))
    }
}
