//! Configuration types

use crate::constants::*;
use catalog_application::ports::registry::StoreProviderConfig;
use catalog_providers::constants::{DEFAULT_MAX_CONNECTIONS, DEFAULT_TABLE_NAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Logging settings
    pub logging: LoggingConfig,
    /// Backing store selection
    pub store: StoreConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HTTP_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json_format: bool,
    /// Also write to a daily-rolling file at this path
    pub file_output: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            json_format: false,
            file_output: None,
        }
    }
}

/// Backing store selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Registered store name ("keyvalue", "relational")
    pub provider: String,
    /// Table holding products
    pub table_name: String,
    /// Connection string; required by the relational store
    pub database_url: Option<String>,
    /// Pool size for database-backed stores
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            database_url: None,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl StoreConfig {
    /// Settings handed to the selected store provider
    pub fn to_provider_config(&self) -> StoreProviderConfig {
        let mut config = StoreProviderConfig::new(&self.provider)
            .with_table_name(&self.table_name)
            .with_max_connections(self.max_connections);
        config.database_url = self.database_url.clone();
        config
    }
}
