//! Product repository over PostgreSQL

use super::pool::PgPool;
use super::row::{ProductRow, Statements};
use async_trait::async_trait;
use catalog_domain::entities::Product;
use catalog_domain::error::{Error, Result};
use catalog_domain::ports::repositories::{
    ProductDeleteRepository, ProductFindAllRepository, ProductFindRepository,
    ProductSaveRepository,
};
use catalog_domain::value_objects::ProductId;
use r2d2_postgres::postgres::Client;
use std::sync::Arc;
use tracing::debug;

/// Implements every product repository port against one table
#[derive(Clone)]
pub struct RelationalProductRepository {
    pool: PgPool,
    statements: Arc<Statements>,
}

impl RelationalProductRepository {
    /// Create a repository over `table_name`
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when `table_name` is not a plain identifier.
    pub fn new(pool: PgPool, table_name: &str) -> Result<Self> {
        Ok(Self {
            pool,
            statements: Arc::new(Statements::new(table_name)?),
        })
    }

    /// Run `op` with a pooled client on the blocking thread pool
    async fn with_client<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Client, &Statements) -> std::result::Result<T, r2d2_postgres::postgres::Error>
            + Send
            + 'static,
    {
        let pool = self.pool.clone();
        let statements = Arc::clone(&self.statements);
        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| Error::repository_with_source("Failed to get database connection", e))?;
            op(&mut conn, &statements)
                .map_err(|e| Error::repository_with_source("Database query failed", e))
        })
        .await
        .map_err(|e| Error::repository_with_source("Database task failed", e))?
    }
}

#[async_trait]
impl ProductSaveRepository for RelationalProductRepository {
    async fn save(&self, product: &Product) -> Result<()> {
        let row = ProductRow::from_product(product);
        let affected = self
            .with_client(move |client, sql| {
                client.execute(
                    sql.upsert.as_str(),
                    &[
                        &row.id,
                        &row.name,
                        &row.description,
                        &row.price,
                        &row.created_at,
                        &row.updated_at,
                    ],
                )
            })
            .await?;
        debug!(product_id = %product.id, affected, "Upserted product row");
        Ok(())
    }
}

#[async_trait]
impl ProductFindRepository for RelationalProductRepository {
    async fn find(&self, id: &ProductId) -> Result<Option<Product>> {
        let id = id.to_string();
        let row = self
            .with_client(move |client, sql| {
                client
                    .query_opt(sql.select_one.as_str(), &[&id])?
                    .map(|row| ProductRow::from_row(&row))
                    .transpose()
            })
            .await?;
        row.map(ProductRow::into_product).transpose()
    }
}

#[async_trait]
impl ProductFindAllRepository for RelationalProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = self
            .with_client(|client, sql| {
                client
                    .query(sql.select_all.as_str(), &[])?
                    .iter()
                    .map(ProductRow::from_row)
                    .collect::<std::result::Result<Vec<_>, _>>()
            })
            .await?;
        rows.into_iter().map(ProductRow::into_product).collect()
    }
}

#[async_trait]
impl ProductDeleteRepository for RelationalProductRepository {
    async fn delete(&self, id: &ProductId) -> Result<()> {
        let id = id.to_string();
        self.with_client(move |client, sql| client.execute(sql.delete.as_str(), &[&id]))
            .await?;
        Ok(())
    }
}
