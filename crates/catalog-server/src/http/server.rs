//! HTTP server
//!
//! Wraps a built [`AppContext`] in a Rocket instance bound to the configured
//! address.

use super::routes::{error_catchers, product_routes};
use catalog_domain::error::{Error, Result};
use catalog_infrastructure::AppContext;
use catalog_infrastructure::config::ServerConfig;
use rocket::{Build, Rocket};
use tracing::info;

/// Rocket instance serving the product routes for `app`
pub fn build_rocket(app: AppContext) -> Rocket<Build> {
    rocket::build()
        .manage(app)
        .mount("/", product_routes())
        .register("/", error_catchers())
}

/// HTTP server
pub struct HttpServer {
    config: ServerConfig,
    app: AppContext,
}

impl HttpServer {
    pub fn new(config: ServerConfig, app: AppContext) -> Self {
        Self { config, app }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the Rocket application without binding
    pub fn rocket(&self) -> Rocket<Build> {
        build_rocket(self.app.clone())
    }

    /// Serve until Rocket shuts down (Ctrl+C or SIGTERM)
    pub async fn start(self) -> Result<()> {
        info!(
            host = %self.config.host,
            port = self.config.port,
            "HTTP server listening"
        );

        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        // Reading the error kind marks a rocket::Error as handled; an
        // unhandled one panics on drop.
        self.rocket()
            .configure(figment)
            .launch()
            .await
            .map_err(|e| Error::infrastructure(format!("HTTP server failed: {}", e.kind())))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

impl std::fmt::Debug for HttpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpServer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
