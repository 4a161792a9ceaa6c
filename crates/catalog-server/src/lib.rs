//! # Product Catalog Server
//!
//! Transport adapters over the catalog use cases.
//!
//! | Module | Transport |
//! |--------|-----------|
//! | [`http`] | Rocket HTTP server under `/products` |
//! | [`functions`] | Serverless handlers for API-Gateway proxy events |
//!
//! Both share the error mapping in [`error`] and are started from [`init`].
//!
//! ```rust,no_run
//! use catalog_server::run_server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     run_server(None).await?;
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod functions;
pub mod http;
pub mod init;

pub use error::ApiError;
pub use functions::{FunctionKind, ProxyHandler, ProxyRequest, ProxyResponse};
pub use http::{HttpServer, build_rocket};
pub use init::{run_function, run_server};
