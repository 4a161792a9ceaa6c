//! Stored shape of a product in the key-value table

use super::table::Item;
use catalog_domain::entities::Product;
use catalog_domain::error::{Error, Result};
use catalog_domain::value_objects::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product as a key-value item; timestamps are RFC 3339 strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductItem {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    /// Rebuild the stored product as-is, without re-validating it
    pub fn into_product(self) -> Product {
        Product::restore(
            ProductId::new(self.id),
            self.name,
            self.description,
            self.price,
            self.created_at,
            self.updated_at,
        )
    }

    pub fn into_item(self) -> Result<Item> {
        match serde_json::to_value(self)? {
            Value::Object(item) => Ok(item),
            other => Err(Error::repository(format!(
                "product item serialized to {other}, expected an object"
            ))),
        }
    }

    pub fn from_item(item: Item) -> Result<Self> {
        serde_json::from_value(Value::Object(item))
            .map_err(|e| Error::repository_with_source("malformed product item", e))
    }
}
