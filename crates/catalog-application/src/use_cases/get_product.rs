//! Get Product Use Case

use super::dto::{GetProductInput, ProductOutput};
use catalog_domain::error::Result;
use catalog_domain::ports::services::ProductFinder;
use catalog_domain::value_objects::ProductId;
use std::sync::Arc;

/// Fetches one product by id
pub struct GetProductUseCase {
    finder: Arc<dyn ProductFinder>,
}

impl GetProductUseCase {
    pub fn new(finder: Arc<dyn ProductFinder>) -> Self {
        Self { finder }
    }

    pub async fn execute(&self, input: GetProductInput) -> Result<ProductOutput> {
        let product = self.finder.get_product(&ProductId::new(input.id)).await?;
        Ok(ProductOutput::from(product))
    }
}
