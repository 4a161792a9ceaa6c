//! Delete Product Use Case

use super::dto::DeleteProductInput;
use catalog_domain::error::Result;
use catalog_domain::ports::services::ProductDeleter;
use catalog_domain::value_objects::ProductId;
use std::sync::Arc;
use tracing::info;

/// Removes a product from the catalog
pub struct DeleteProductUseCase {
    deleter: Arc<dyn ProductDeleter>,
}

impl DeleteProductUseCase {
    pub fn new(deleter: Arc<dyn ProductDeleter>) -> Self {
        Self { deleter }
    }

    pub async fn execute(&self, input: DeleteProductInput) -> Result<()> {
        let id = ProductId::new(input.id);
        self.deleter.delete_product(&id).await?;
        info!(product_id = %id, "Product deleted");
        Ok(())
    }
}
