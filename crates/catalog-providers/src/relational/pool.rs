//! Connection pool and schema management

use crate::constants::CONNECTION_TIMEOUT_SECS;
use super::row::Statements;
use catalog_domain::error::{Error, Result};
use r2d2::Pool;
use r2d2_postgres::postgres::{Config, NoTls};
use r2d2_postgres::PostgresConnectionManager;
use std::time::Duration;
use tracing::info;

/// Pool of PostgreSQL connections
pub type PgPool = Pool<PostgresConnectionManager<NoTls>>;

/// Create a pool for `url` without opening any connection yet
///
/// Connections are established on first use, so an unreachable server shows
/// up as a repository error on the first query rather than here.
///
/// # Errors
///
/// [`Error::Configuration`] when `url` is not a valid connection string.
pub fn create_pool(url: &str, max_connections: u32) -> Result<PgPool> {
    let config: Config = url
        .parse()
        .map_err(|e| Error::configuration_with_source("Invalid database URL", e))?;
    let manager = PostgresConnectionManager::new(config, NoTls);

    let pool = Pool::builder()
        .max_size(max_connections.max(1))
        .min_idle(Some(0))
        .connection_timeout(Duration::from_secs(CONNECTION_TIMEOUT_SECS))
        .build_unchecked(manager);
    Ok(pool)
}

/// Create the products table when it does not exist yet
///
/// Blocking; call it outside the async executor.
pub fn ensure_schema(pool: &PgPool, table_name: &str) -> Result<()> {
    let statements = Statements::new(table_name)?;
    let mut conn = pool
        .get()
        .map_err(|e| Error::repository_with_source("Failed to get database connection", e))?;
    conn.batch_execute(&statements.create_table)
        .map_err(|e| Error::repository_with_source("Failed to create products table", e))?;
    info!(table = %table_name, "Products table ready");
    Ok(())
}

/// Accept only plain SQL identifiers as table names
///
/// The name is interpolated into statements, so anything beyond ASCII
/// letters, digits and underscores (not leading with a digit) is rejected.
pub fn validate_table_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(Error::configuration(format!("Invalid table name '{name}'")))
    }
}
