//! Synchronous HTTP transport (Rocket)

pub mod routes;
pub mod server;

pub use routes::{error_catchers, product_routes};
pub use server::{HttpServer, build_rocket};
