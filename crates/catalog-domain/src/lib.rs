//! # Domain Layer
//!
//! Core business types of the product catalog: the [`Product`] entity with
//! its validation rules, the repository ports persistence adapters implement,
//! and the domain services that enforce existence checks.
//!
//! This crate has no knowledge of transports, stores, or how components are
//! constructed.

pub mod entities;
pub mod error;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use entities::Product;
pub use error::{Error, Result};
pub use value_objects::ProductId;
