//! Application configuration

pub mod loader;
pub mod types;

pub use loader::{ConfigLoader, validate_app_config};
pub use types::{AppConfig, LoggingConfig, ServerConfig, StoreConfig};
