//! # Product Catalog
//!
//! Validated create, read, update, delete and list operations on products,
//! served over HTTP or as serverless functions, backed by a key-value or a
//! relational store.
//!
//! ## Architecture
//!
//! - `domain` - entity, errors, repository and service ports
//! - `application` - recipe-based construction layer and use cases
//! - `providers` - store implementations registered at link time
//! - `infrastructure` - configuration, logging and the composition root
//! - `server` - HTTP routes and serverless handlers
//!
//! ## Example
//!
//! ```no_run
//! use catalog::infrastructure::{AppConfig, init_app};
//! use catalog::application::use_cases::AddProductInput;
//!
//! # async fn demo() -> catalog::Result<()> {
//! let app = init_app(AppConfig::default()).await?;
//! let product = app
//!     .add_product()
//!     .execute(AddProductInput {
//!         id: "sku-1".into(),
//!         name: "Mug".into(),
//!         description: "Ceramic mug".into(),
//!         price: 9.5,
//!     })
//!     .await?;
//! assert_eq!(product.id, "sku-1");
//! # Ok(())
//! # }
//! ```

/// Domain layer - entities, errors and ports
pub mod domain {
    pub use catalog_domain::*;
}

/// Application layer - construction layer and use cases
pub mod application {
    pub use catalog_application::*;
}

/// Store implementations
pub mod providers {
    pub use catalog_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use catalog_infrastructure::*;
}

/// Server layer - HTTP routes and serverless handlers
pub mod server {
    pub use catalog_server::*;
}

pub use domain::{Error, Result};
pub use server::{run_function, run_server};
