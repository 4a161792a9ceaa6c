//! Domain service wiring
//!
//! The services themselves live in `catalog_domain::services`; this module
//! only describes how the construction layer builds them.

pub mod recipes;
