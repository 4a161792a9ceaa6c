//! Domain services

pub mod product_service;

pub use product_service::{
    AllProductFinderService, ProductAdderService, ProductDeleterService, ProductFinderService,
    ProductService, ProductUpdaterService,
};
