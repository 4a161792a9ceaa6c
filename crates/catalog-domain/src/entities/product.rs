//! Product entity
//!
//! The single aggregate of the catalog. Every mutation goes through a
//! validating method so a `Product` held by the domain is always well-formed.

use crate::error::{Error, Result};
use crate::value_objects::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Catalog product
///
/// # Example
///
/// ```
/// use catalog_domain::entities::Product;
///
/// let mut product = Product::new("sku-1", "Mug", "Ceramic mug", 9.5).unwrap();
/// product.change_price(11.0).unwrap();
/// assert_eq!(product.price, 11.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Unit price, always positive
    pub price: f64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a validated product stamped with the current time
    ///
    /// Fields are checked in declaration order and the first invalid one is
    /// reported.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        let description = description.into();

        if id.is_empty() {
            return Err(Error::InvalidProductId);
        }
        validate_name(&name)?;
        validate_description(&description)?;
        validate_price(price)?;

        let now = Utc::now();
        Ok(Self {
            id,
            name,
            description,
            price,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a product from stored state without re-stamping timestamps
    pub fn restore(
        id: ProductId,
        name: String,
        description: String,
        price: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            created_at,
            updated_at,
        }
    }

    /// Rename the product
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Replace the description
    pub fn change_description(&mut self, description: impl Into<String>) -> Result<()> {
        let description = description.into();
        validate_description(&description)?;
        self.description = description;
        self.touch();
        Ok(())
    }

    /// Reprice the product
    pub fn change_price(&mut self, price: f64) -> Result<()> {
        validate_price(price)?;
        self.price = price;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::InvalidProductName);
    }
    Ok(())
}

fn validate_description(description: &str) -> Result<()> {
    if description.is_empty() {
        return Err(Error::InvalidProductDescription);
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<()> {
    if !price.is_finite() || price <= 0.0 {
        return Err(Error::InvalidProductPrice);
    }
    Ok(())
}
