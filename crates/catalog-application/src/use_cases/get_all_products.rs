//! Get All Products Use Case

use super::dto::ProductOutput;
use catalog_domain::error::Result;
use catalog_domain::ports::services::AllProductFinder;
use std::sync::Arc;

/// Lists the whole catalog
pub struct GetAllProductsUseCase {
    finder: Arc<dyn AllProductFinder>,
}

impl GetAllProductsUseCase {
    pub fn new(finder: Arc<dyn AllProductFinder>) -> Self {
        Self { finder }
    }

    /// Every stored product, in the order the store returns them
    pub async fn execute(&self) -> Result<Vec<ProductOutput>> {
        let products = self.finder.get_all_products().await?;
        Ok(products.iter().map(ProductOutput::from).collect())
    }
}
