//! Process entry points
//!
//! Both modes load the configuration, install logging and build the
//! [`AppContext`](catalog_infrastructure::AppContext) the same way; they only
//! differ in the transport driven afterwards.

use crate::functions::{self, FunctionKind};
use crate::http::HttpServer;
use catalog_domain::error::Result;
use catalog_infrastructure::config::{AppConfig, ConfigLoader};
use catalog_infrastructure::init_app;
use catalog_infrastructure::logging::init_logging;
use std::path::Path;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::info;

/// Load configuration from an optional explicit path
pub fn load_config(config_path: Option<&Path>) -> Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    loader.load()
}

/// Run the HTTP server until shutdown
pub async fn run_server(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        host = %config.server.host,
        port = config.server.port,
        store = %config.store.provider,
        "Starting product catalog server"
    );

    let server_config = config.server.clone();
    let app = init_app(config).await?;
    HttpServer::new(server_config, app).start().await
}

/// Handle a single proxy event read from stdin and print the response
pub async fn run_function(config_path: Option<&Path>, kind: FunctionKind) -> Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;
    let app = init_app(config).await?;

    let mut event = String::new();
    tokio::io::stdin().read_to_string(&mut event).await?;

    let response = functions::invoke(kind, &app, &event).await?;

    let mut stdout = tokio::io::stdout();
    stdout.write_all(response.as_bytes()).await?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;
    Ok(())
}
