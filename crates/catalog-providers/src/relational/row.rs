//! Row mapping and SQL statements

use super::pool::validate_table_name;
use catalog_domain::entities::Product;
use catalog_domain::error::{Error, Result};
use catalog_domain::value_objects::ProductId;
use chrono::{DateTime, SecondsFormat, Utc};
use r2d2_postgres::postgres::Row;

/// Product as stored in the products table
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub created_at: String,
    pub updated_at: String,
}

impl ProductRow {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            created_at: product
                .created_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
            updated_at: product
                .updated_at
                .to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }

    /// Read a row selected with [`Statements::COLUMNS`]
    pub fn from_row(row: &Row) -> std::result::Result<Self, r2d2_postgres::postgres::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            price: row.try_get("price")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }

    /// Rebuild the stored product
    ///
    /// # Errors
    ///
    /// [`Error::Repository`] when a timestamp column is not RFC 3339.
    pub fn into_product(self) -> Result<Product> {
        let created_at = parse_timestamp("created_at", &self.created_at)?;
        let updated_at = parse_timestamp("updated_at", &self.updated_at)?;
        Ok(Product::restore(
            ProductId::new(self.id),
            self.name,
            self.description,
            self.price,
            created_at,
            updated_at,
        ))
    }
}

fn parse_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| Error::repository_with_source(format!("Invalid {column} value '{value}'"), e))
}

/// SQL for one products table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statements {
    pub create_table: String,
    pub upsert: String,
    pub select_one: String,
    pub select_all: String,
    pub delete: String,
}

impl Statements {
    /// Column list shared by every select
    pub const COLUMNS: &'static str = "id, name, description, price, created_at, updated_at";

    /// Statements for `table`, which must be a plain identifier
    pub fn new(table: &str) -> Result<Self> {
        validate_table_name(table)?;
        let columns = Self::COLUMNS;
        Ok(Self {
            create_table: format!(
                "CREATE TABLE IF NOT EXISTS {table} (\
                 id TEXT PRIMARY KEY, \
                 name VARCHAR(100) NOT NULL, \
                 description TEXT NOT NULL, \
                 price DOUBLE PRECISION NOT NULL, \
                 created_at TEXT NOT NULL, \
                 updated_at TEXT NOT NULL)"
            ),
            upsert: format!(
                "INSERT INTO {table} ({columns}) VALUES ($1, $2, $3, $4, $5, $6) \
                 ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 description = EXCLUDED.description, \
                 price = EXCLUDED.price, \
                 updated_at = EXCLUDED.updated_at"
            ),
            select_one: format!("SELECT {columns} FROM {table} WHERE id = $1"),
            select_all: format!("SELECT {columns} FROM {table} ORDER BY id"),
            delete: format!("DELETE FROM {table} WHERE id = $1"),
        })
    }
}
