//! Configuration loader
//!
//! Sources are merged in order, later ones overriding earlier ones:
//!
//! 1. `AppConfig::default()`
//! 2. A TOML file: the explicit path, or the first `catalog.toml` found in
//!    the working directory, `./catalog/`, or the user config directory
//! 3. `CATALOG_`-prefixed environment variables, `__` separating nested
//!    keys (`CATALOG_STORE__DATABASE_URL`)

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use catalog_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Read this file instead of searching for `catalog.toml`
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The merged, not yet extracted, configuration sources
    pub fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        match &self.config_path {
            Some(path) if path.exists() => {
                figment = figment.merge(Toml::file(path));
                log_config_loaded(path, true);
            }
            Some(path) => log_config_loaded(path, false),
            None => {
                if let Some(path) = Self::find_default_config_path() {
                    figment = figment.merge(Toml::file(&path));
                    log_config_loaded(&path, true);
                }
            }
        }

        figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        )
    }

    /// Load, extract and validate the configuration
    ///
    /// # Errors
    ///
    /// [`Error::Configuration`] when a source cannot be parsed or a value
    /// fails validation. An explicit path that does not exist is not an
    /// error; the remaining sources still apply.
    pub fn load(&self) -> Result<AppConfig> {
        let config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;
        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write `config` as pretty TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;
        Ok(())
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;
        let mut candidates = vec![
            current_dir.join(DEFAULT_CONFIG_FILENAME),
            current_dir
                .join(DEFAULT_CONFIG_DIR)
                .join(DEFAULT_CONFIG_FILENAME),
        ];
        if let Some(dir) = dirs::config_dir() {
            candidates.push(dir.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME));
        }
        candidates.into_iter().find(|path| path.exists())
    }
}

/// Check cross-field constraints serde cannot express
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    if config.server.host.trim().is_empty() {
        return Err(Error::configuration("Server host cannot be empty"));
    }
    parse_log_level(&config.logging.level)?;

    let store = &config.store;
    if store.provider.trim().is_empty() {
        return Err(Error::configuration("Store provider cannot be empty"));
    }
    if store.table_name.trim().is_empty() {
        return Err(Error::configuration("Store table name cannot be empty"));
    }
    if store.max_connections == 0 {
        return Err(Error::configuration("Store max_connections cannot be 0"));
    }
    if store.provider == "relational"
        && store.database_url.as_deref().is_none_or(str::is_empty)
    {
        return Err(Error::configuration(
            "store.database_url is required for the relational store",
        ));
    }
    Ok(())
}
