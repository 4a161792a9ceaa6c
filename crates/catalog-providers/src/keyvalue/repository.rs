//! Product repository over a [`KeyValueTable`]

use super::entity::ProductItem;
use super::table::KeyValueTable;
use async_trait::async_trait;
use catalog_domain::entities::Product;
use catalog_domain::error::Result;
use catalog_domain::ports::repositories::{
    ProductDeleteRepository, ProductFindAllRepository, ProductFindRepository,
    ProductSaveRepository,
};
use catalog_domain::value_objects::ProductId;
use std::sync::Arc;
use tracing::debug;

/// Implements every product repository port against one table
pub struct KeyValueProductRepository {
    table: Arc<dyn KeyValueTable>,
    table_name: String,
}

impl KeyValueProductRepository {
    pub fn new(table: Arc<dyn KeyValueTable>, table_name: impl Into<String>) -> Self {
        Self {
            table,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

#[async_trait]
impl ProductSaveRepository for KeyValueProductRepository {
    async fn save(&self, product: &Product) -> Result<()> {
        let item = ProductItem::from_product(product).into_item()?;
        self.table.put_item(&self.table_name, item).await?;
        debug!(table = %self.table_name, product_id = %product.id, "Stored product item");
        Ok(())
    }
}

#[async_trait]
impl ProductFindRepository for KeyValueProductRepository {
    async fn find(&self, id: &ProductId) -> Result<Option<Product>> {
        self.table
            .get_item(&self.table_name, id.as_str())
            .await?
            .map(|item| ProductItem::from_item(item).map(ProductItem::into_product))
            .transpose()
    }
}

#[async_trait]
impl ProductFindAllRepository for KeyValueProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        self.table
            .scan(&self.table_name)
            .await?
            .into_iter()
            .map(|item| ProductItem::from_item(item).map(ProductItem::into_product))
            .collect()
    }
}

#[async_trait]
impl ProductDeleteRepository for KeyValueProductRepository {
    async fn delete(&self, id: &ProductId) -> Result<()> {
        self.table.delete_item(&self.table_name, id.as_str()).await
    }
}
