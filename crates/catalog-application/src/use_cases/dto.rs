//! Use case input and output shapes
//!
//! These are the payloads adapters (HTTP handlers, serverless functions)
//! exchange with the application layer. Output timestamps are rendered with
//! [`TIMESTAMP_FORMAT`](crate::constants::TIMESTAMP_FORMAT).

use crate::constants::TIMESTAMP_FORMAT;
use catalog_domain::entities::Product;
use catalog_domain::ports::services::ProductChanges;
use serde::{Deserialize, Serialize};

/// Payload for adding a product
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddProductInput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Payload identifying a single product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetProductInput {
    pub id: String,
}

/// Payload for updating a product; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateProductInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl UpdateProductInput {
    /// The field changes carried by this input
    pub fn changes(&self) -> ProductChanges {
        ProductChanges {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}

/// Payload for deleting a product
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeleteProductInput {
    pub id: String,
}

/// Product as returned by every use case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductOutput {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Product> for ProductOutput {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            created_at: product.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: product.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }
}

impl From<Product> for ProductOutput {
    fn from(product: Product) -> Self {
        Self::from(&product)
    }
}
