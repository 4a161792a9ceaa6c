//! Serverless function tests over the key-value store

use catalog_application::use_cases::ProductOutput;
use catalog_infrastructure::AppContext;
use catalog_infrastructure::config::AppConfig;
use catalog_infrastructure::init_app;
use catalog_server::error::ErrorBody;
use catalog_server::functions::{
    AddProductFunction, FunctionKind, HttpMethodGuard, ProxyHandler, ProxyRequest, ProxyResponse,
    function_for, invoke,
};
use rocket::http::Method;

const MUG: &str = r#"{"id":"sku-1","name":"Mug","description":"Ceramic mug","price":9.5}"#;

async fn app() -> AppContext {
    init_app(AppConfig::default()).await.expect("app context")
}

async fn call(app: &AppContext, kind: FunctionKind, request: ProxyRequest) -> ProxyResponse {
    function_for(kind, app).handle(request).await
}

async fn add_mug(app: &AppContext) {
    let response = call(app, FunctionKind::Add, ProxyRequest::new("POST").with_body(MUG)).await;
    assert_eq!(response.status_code, 201);
}

fn error_of(response: &ProxyResponse) -> String {
    serde_json::from_str::<ErrorBody>(&response.body)
        .expect("error body")
        .error
}

#[test]
fn proxy_request_reads_gateway_json() {
    let event = r#"{
        "httpMethod": "GET",
        "path": "/products/sku-1",
        "headers": null,
        "pathParameters": {"id": "sku-1"},
        "body": null,
        "isBase64Encoded": false
    }"#;

    let request: ProxyRequest = serde_json::from_str(event).unwrap();

    assert_eq!(request.http_method, "GET");
    assert_eq!(request.path_parameter("id"), "sku-1");
    assert_eq!(request.path_parameter("missing"), "");
    assert_eq!(request.body(), "");
}

#[test]
fn proxy_request_tolerates_null_path_parameters() {
    let request: ProxyRequest =
        serde_json::from_str(r#"{"httpMethod":"GET","pathParameters":null}"#).unwrap();

    assert_eq!(request.path_parameter("id"), "");
}

#[test]
fn proxy_response_serializes_camel_case() {
    let response = ProxyResponse::empty(rocket::http::Status::NoContent);
    let value = serde_json::to_value(&response).unwrap();

    assert_eq!(value["statusCode"], 204);
    assert_eq!(value["body"], "");
}

#[test]
fn function_kind_names_match_cli_values() {
    let names: Vec<_> = [
        FunctionKind::Add,
        FunctionKind::Get,
        FunctionKind::List,
        FunctionKind::Update,
        FunctionKind::Delete,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();

    assert_eq!(names, ["add", "get", "list", "update", "delete"]);
}

#[tokio::test]
async fn add_returns_created_with_json_header() {
    let app = app().await;

    let response = call(&app, FunctionKind::Add, ProxyRequest::new("POST").with_body(MUG)).await;

    assert_eq!(response.status_code, 201);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );
    let product: ProductOutput = serde_json::from_str(&response.body).unwrap();
    assert_eq!(product.id, "sku-1");
}

#[tokio::test]
async fn add_rejects_other_methods() {
    let app = app().await;

    let response = call(&app, FunctionKind::Add, ProxyRequest::new("GET").with_body(MUG)).await;

    assert_eq!(response.status_code, 405);
    assert_eq!(error_of(&response), "method not allowed");
    let listed = app.get_all_products().execute().await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn add_with_missing_body_is_invalid_json() {
    let app = app().await;

    let response = call(&app, FunctionKind::Add, ProxyRequest::new("POST")).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(error_of(&response), "invalid JSON");
}

#[tokio::test]
async fn add_duplicate_is_conflict() {
    let app = app().await;
    add_mug(&app).await;

    let response = call(&app, FunctionKind::Add, ProxyRequest::new("POST").with_body(MUG)).await;

    assert_eq!(response.status_code, 409);
    assert_eq!(error_of(&response), "product already exists");
}

#[tokio::test]
async fn custom_guard_replaces_the_default() {
    let app = app().await;
    let function = AddProductFunction::new(app.add_product())
        .with_guard(HttpMethodGuard::new([Method::Put]));

    let rejected = function.handle(ProxyRequest::new("POST").with_body(MUG)).await;
    let accepted = function.handle(ProxyRequest::new("PUT").with_body(MUG)).await;

    assert_eq!(rejected.status_code, 405);
    assert_eq!(accepted.status_code, 201);
}

#[tokio::test]
async fn get_without_id_is_invalid_product_id() {
    let app = app().await;

    let response = call(&app, FunctionKind::Get, ProxyRequest::new("GET")).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(error_of(&response), "invalid product ID");
}

#[tokio::test]
async fn get_finds_stored_product() {
    let app = app().await;
    add_mug(&app).await;

    let request = ProxyRequest::new("GET").with_path_parameter("id", "sku-1");
    let response = call(&app, FunctionKind::Get, request).await;

    assert_eq!(response.status_code, 200);
    let product: ProductOutput = serde_json::from_str(&response.body).unwrap();
    assert_eq!(product.name, "Mug");
}

#[tokio::test]
async fn get_missing_is_not_found() {
    let app = app().await;

    let request = ProxyRequest::new("GET").with_path_parameter("id", "ghost");
    let response = call(&app, FunctionKind::Get, request).await;

    assert_eq!(response.status_code, 404);
    assert_eq!(error_of(&response), "product not found");
}

#[tokio::test]
async fn list_returns_json_array() {
    let app = app().await;

    let empty = call(&app, FunctionKind::List, ProxyRequest::new("GET")).await;
    assert_eq!(empty.status_code, 200);
    assert_eq!(empty.body, "[]");

    add_mug(&app).await;
    let listed = call(&app, FunctionKind::List, ProxyRequest::new("GET")).await;
    let products: Vec<ProductOutput> = serde_json::from_str(&listed.body).unwrap();
    assert_eq!(products.len(), 1);

    let rejected = call(&app, FunctionKind::List, ProxyRequest::new("POST")).await;
    assert_eq!(rejected.status_code, 405);
}

#[tokio::test]
async fn update_accepts_put_and_patch() {
    let app = app().await;
    add_mug(&app).await;

    let put = ProxyRequest::new("PUT")
        .with_path_parameter("id", "sku-1")
        .with_body(r#"{"price":10.0}"#);
    let response = call(&app, FunctionKind::Update, put).await;
    assert_eq!(response.status_code, 200);

    let patch = ProxyRequest::new("PATCH")
        .with_path_parameter("id", "sku-1")
        .with_body(r#"{"description":"Stoneware mug"}"#);
    let response = call(&app, FunctionKind::Update, patch).await;
    assert_eq!(response.status_code, 200);

    let product: ProductOutput = serde_json::from_str(&response.body).unwrap();
    assert_eq!(product.price, 10.0);
    assert_eq!(product.description, "Stoneware mug");
    assert_eq!(product.name, "Mug");
}

#[tokio::test]
async fn update_rejects_invalid_values_and_methods() {
    let app = app().await;
    add_mug(&app).await;

    let invalid = ProxyRequest::new("PUT")
        .with_path_parameter("id", "sku-1")
        .with_body(r#"{"price":-1}"#);
    let response = call(&app, FunctionKind::Update, invalid).await;
    assert_eq!(response.status_code, 400);
    assert_eq!(error_of(&response), "invalid product price");

    let wrong_method = ProxyRequest::new("POST")
        .with_path_parameter("id", "sku-1")
        .with_body("{}");
    let response = call(&app, FunctionKind::Update, wrong_method).await;
    assert_eq!(response.status_code, 405);
}

#[tokio::test]
async fn delete_returns_no_content_then_not_found() {
    let app = app().await;
    add_mug(&app).await;

    let request = ProxyRequest::new("DELETE").with_path_parameter("id", "sku-1");
    let response = call(&app, FunctionKind::Delete, request.clone()).await;
    assert_eq!(response.status_code, 204);
    assert!(response.body.is_empty());

    let response = call(&app, FunctionKind::Delete, request).await;
    assert_eq!(response.status_code, 404);
}

#[tokio::test]
async fn invoke_round_trips_a_gateway_event() {
    let app = app().await;
    let event = serde_json::json!({
        "httpMethod": "POST",
        "body": MUG,
    })
    .to_string();

    let output = invoke(FunctionKind::Add, &app, &event).await.unwrap();

    let response: ProxyResponse = serde_json::from_str(&output).unwrap();
    assert_eq!(response.status_code, 201);
    assert!(app.get_product().execute(catalog_application::use_cases::GetProductInput {
        id: "sku-1".into()
    })
    .await
    .is_ok());
}

#[tokio::test]
async fn invoke_rejects_an_event_that_is_not_json() {
    let app = app().await;

    let err = invoke(FunctionKind::List, &app, "GET /products").await.unwrap_err();

    assert!(matches!(err, catalog_domain::Error::Json { .. }));
}
