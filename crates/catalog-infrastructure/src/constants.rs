//! Infrastructure constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "catalog.toml";

/// Directory name used under the working and user config directories
pub const DEFAULT_CONFIG_DIR: &str = "catalog";

/// Prefix of configuration environment variables (`CATALOG_SERVER__PORT`)
pub const CONFIG_ENV_PREFIX: &str = "CATALOG";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

// ============================================================================
// STORE CONSTANTS
// ============================================================================

/// Store used when the configuration names none
pub const DEFAULT_STORE_PROVIDER: &str = "keyvalue";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable holding a full `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "CATALOG_LOG";

/// File stem used for rolling log files when the path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "catalog";
