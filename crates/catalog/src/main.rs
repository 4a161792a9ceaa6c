//! Product Catalog - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `catalog serve` | HTTP server on the configured address |
//! | `catalog invoke <function>` | One proxy event from stdin, response to stdout |

// Force-link catalog-providers so the store registrations are included
extern crate catalog_providers;

use catalog::server::FunctionKind;
use catalog::{run_function, run_server};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line interface for the product catalog
#[derive(Parser, Debug)]
#[command(name = "catalog")]
#[command(about = "Product catalog service - HTTP server and serverless functions")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve,
    /// Handle one API-Gateway proxy event read from stdin
    Invoke {
        /// Function to run
        #[arg(value_enum)]
        function: FunctionKind,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve => run_server(cli.config.as_deref()).await?,
        Command::Invoke { function } => run_function(cli.config.as_deref(), function).await?,
    }
    Ok(())
}
