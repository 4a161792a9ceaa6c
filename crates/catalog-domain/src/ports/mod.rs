//! Domain ports
//!
//! Interfaces the domain exposes to (services) and requires from
//! (repositories) the outer layers.

pub mod repositories;
pub mod services;

pub use repositories::{
    ProductDeleteRepository, ProductFindAllRepository, ProductFindRepository, ProductRepository,
    ProductSaveRepository,
};
pub use services::{
    AllProductFinder, ProductAdder, ProductChanges, ProductDeleter, ProductFinder, ProductUpdater,
};
