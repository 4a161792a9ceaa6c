//! Product routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | `POST` | `/products` | 201 + product |
//! | `GET` | `/products` | 200 + product list |
//! | `GET` | `/products/<id>` | 200 + product |
//! | `PUT`, `PATCH` | `/products/<id>` | 200 + product |
//! | `DELETE` | `/products/<id>` | 204 |
//!
//! Other methods on those paths answer 405. Unmatched requests fall through
//! to [`default_catcher`], so every error body is JSON.

use crate::error::{ApiError, ErrorBody, parse_body};
use catalog_application::use_cases::{
    AddProductInput, DeleteProductInput, GetProductInput, ProductOutput, UpdateProductInput,
};
use catalog_infrastructure::AppContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, Route, State, catch, catchers, delete, get, patch, post, put, routes};

type ApiResult<T> = Result<T, ApiError>;

/// Every product route, including the 405 fallbacks
pub fn product_routes() -> Vec<Route> {
    routes![
        add_product,
        get_all_products,
        get_product,
        put_product,
        patch_product,
        delete_product,
        put_collection,
        patch_collection,
        delete_collection,
        post_item,
    ]
}

pub fn error_catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}

#[post("/products", data = "<body>")]
pub async fn add_product(
    app: &State<AppContext>,
    body: &str,
) -> ApiResult<(Status, Json<ProductOutput>)> {
    let input: AddProductInput = parse_body(body)?;
    let product = app.add_product().execute(input).await?;
    Ok((Status::Created, Json(product)))
}

#[get("/products")]
pub async fn get_all_products(app: &State<AppContext>) -> ApiResult<Json<Vec<ProductOutput>>> {
    let products = app.get_all_products().execute().await?;
    Ok(Json(products))
}

#[get("/products/<id>")]
pub async fn get_product(app: &State<AppContext>, id: &str) -> ApiResult<Json<ProductOutput>> {
    let product = app
        .get_product()
        .execute(GetProductInput { id: id.to_string() })
        .await?;
    Ok(Json(product))
}

#[put("/products/<id>", data = "<body>")]
pub async fn put_product(
    app: &State<AppContext>,
    id: &str,
    body: &str,
) -> ApiResult<Json<ProductOutput>> {
    update_product(app, id, body).await
}

#[patch("/products/<id>", data = "<body>")]
pub async fn patch_product(
    app: &State<AppContext>,
    id: &str,
    body: &str,
) -> ApiResult<Json<ProductOutput>> {
    update_product(app, id, body).await
}

/// The path identifier wins over any `id` in the body
async fn update_product(app: &AppContext, id: &str, body: &str) -> ApiResult<Json<ProductOutput>> {
    let mut input: UpdateProductInput = parse_body(body)?;
    input.id = id.to_string();
    let product = app.update_product().execute(input).await?;
    Ok(Json(product))
}

#[delete("/products/<id>")]
pub async fn delete_product(app: &State<AppContext>, id: &str) -> ApiResult<Status> {
    app.delete_product()
        .execute(DeleteProductInput { id: id.to_string() })
        .await?;
    Ok(Status::NoContent)
}

// ============================================================================
// 405 fallbacks
// ============================================================================

#[put("/products")]
pub fn put_collection() -> ApiError {
    ApiError::method_not_allowed()
}

#[patch("/products")]
pub fn patch_collection() -> ApiError {
    ApiError::method_not_allowed()
}

#[delete("/products")]
pub fn delete_collection() -> ApiError {
    ApiError::method_not_allowed()
}

#[post("/products/<_>")]
pub fn post_item() -> ApiError {
    ApiError::method_not_allowed()
}

/// JSON body for errors raised outside the handlers (no route, body too large)
#[catch(default)]
pub fn default_catcher(status: Status, _request: &Request<'_>) -> (Status, Json<ErrorBody>) {
    let error = status.reason().unwrap_or("unknown error").to_lowercase();
    (status, Json(ErrorBody { error }))
}
