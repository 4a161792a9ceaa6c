//! Component keys
//!
//! Registry keys shared by recipes, store providers and the bootstrap.
//! Foundational handles are store-specific and declared next to the
//! provider that registers them.

/// `Arc<dyn ProductSaveRepository>`
pub const PRODUCT_SAVE_REPOSITORY: &str = "ProductSaveRepository";
/// `Arc<dyn ProductFindRepository>`
pub const PRODUCT_FIND_REPOSITORY: &str = "ProductFindRepository";
/// `Arc<dyn ProductFindAllRepository>`
pub const PRODUCT_FIND_ALL_REPOSITORY: &str = "ProductFindAllRepository";
/// `Arc<dyn ProductDeleteRepository>`
pub const PRODUCT_DELETE_REPOSITORY: &str = "ProductDeleteRepository";

/// `Arc<dyn ProductAdder>`
pub const PRODUCT_ADDER: &str = "ProductAdder";
/// `Arc<dyn ProductFinder>`
pub const PRODUCT_FINDER: &str = "ProductFinder";
/// `Arc<dyn AllProductFinder>`
pub const ALL_PRODUCT_FINDER: &str = "AllProductFinder";
/// `Arc<dyn ProductUpdater>`
pub const PRODUCT_UPDATER: &str = "ProductUpdater";
/// `Arc<dyn ProductDeleter>`
pub const PRODUCT_DELETER: &str = "ProductDeleter";

/// `Arc<AddProductUseCase>`
pub const ADD_PRODUCT_USE_CASE: &str = "AddProductUseCase";
/// `Arc<GetProductUseCase>`
pub const GET_PRODUCT_USE_CASE: &str = "GetProductUseCase";
/// `Arc<GetAllProductsUseCase>`
pub const GET_ALL_PRODUCTS_USE_CASE: &str = "GetAllProductsUseCase";
/// `Arc<UpdateProductUseCase>`
pub const UPDATE_PRODUCT_USE_CASE: &str = "UpdateProductUseCase";
/// `Arc<DeleteProductUseCase>`
pub const DELETE_PRODUCT_USE_CASE: &str = "DeleteProductUseCase";

/// Repository keys, built first
pub const REPOSITORY_KEYS: [&str; 4] = [
    PRODUCT_SAVE_REPOSITORY,
    PRODUCT_FIND_REPOSITORY,
    PRODUCT_FIND_ALL_REPOSITORY,
    PRODUCT_DELETE_REPOSITORY,
];

/// Domain service keys, built after the repositories
pub const DOMAIN_SERVICE_KEYS: [&str; 5] = [
    PRODUCT_ADDER,
    PRODUCT_FINDER,
    ALL_PRODUCT_FINDER,
    PRODUCT_UPDATER,
    PRODUCT_DELETER,
];

/// Use case keys, built last
pub const USE_CASE_KEYS: [&str; 5] = [
    ADD_PRODUCT_USE_CASE,
    GET_PRODUCT_USE_CASE,
    GET_ALL_PRODUCTS_USE_CASE,
    UPDATE_PRODUCT_USE_CASE,
    DELETE_PRODUCT_USE_CASE,
];
