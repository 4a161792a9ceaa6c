//! Use Cases
//!
//! Application entry points consumed by the server adapters. Each use case
//! wraps one domain capability and converts between DTOs and entities.

pub mod add_product;
pub mod delete_product;
pub mod dto;
pub mod get_all_products;
pub mod get_product;
pub mod recipes;
pub mod update_product;

pub use add_product::AddProductUseCase;
pub use delete_product::DeleteProductUseCase;
pub use dto::{
    AddProductInput, DeleteProductInput, GetProductInput, ProductOutput, UpdateProductInput,
};
pub use get_all_products::GetAllProductsUseCase;
pub use get_product::GetProductUseCase;
pub use update_product::UpdateProductUseCase;
