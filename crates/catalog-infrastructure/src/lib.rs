//! # Infrastructure Layer
//!
//! Cross-cutting concerns for the catalog service:
//!
//! | Module | Concern |
//! |--------|---------|
//! | [`config`] | Figment-based configuration (defaults, TOML, `CATALOG_*` env) |
//! | [`logging`] | `tracing` subscriber setup |
//! | [`error_ext`] | Context helpers mapping foreign errors to domain errors |
//! | [`di`] | Composition root built on the recipe factory |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{AppContext, init_app};

// Link the store implementations so their registry entries are present.
use catalog_providers as _;
