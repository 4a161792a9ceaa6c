//! One handler per product operation
//!
//! Each handler checks the method, decodes the event, runs its use case and
//! always answers with a [`ProxyResponse`]; failures become error bodies.

use super::guard::HttpMethodGuard;
use super::proxy::{ProxyRequest, ProxyResponse};
use crate::constants::ID_PATH_PARAMETER;
use crate::error::{ApiError, parse_body};
use async_trait::async_trait;
use catalog_application::use_cases::{
    AddProductInput, AddProductUseCase, DeleteProductInput, DeleteProductUseCase,
    GetAllProductsUseCase, GetProductInput, GetProductUseCase, UpdateProductInput,
    UpdateProductUseCase,
};
use rocket::http::{Method, Status};
use std::sync::Arc;

type HandlerResult = Result<ProxyResponse, ApiError>;

/// A serverless function entry point
#[async_trait]
pub trait ProxyHandler: Send + Sync {
    async fn handle(&self, request: ProxyRequest) -> ProxyResponse;
}

fn respond(result: HandlerResult) -> ProxyResponse {
    result.unwrap_or_else(ProxyResponse::from)
}

/// `POST`: body is the full product
pub struct AddProductFunction {
    use_case: Arc<AddProductUseCase>,
    guard: HttpMethodGuard,
}

impl AddProductFunction {
    pub fn new(use_case: Arc<AddProductUseCase>) -> Self {
        Self {
            use_case,
            guard: HttpMethodGuard::new([Method::Post]),
        }
    }

    pub fn with_guard(mut self, guard: HttpMethodGuard) -> Self {
        self.guard = guard;
        self
    }

    async fn run(&self, request: &ProxyRequest) -> HandlerResult {
        self.guard.check(&request.http_method)?;
        let input: AddProductInput = parse_body(request.body())?;
        let product = self.use_case.execute(input).await?;
        Ok(ProxyResponse::json(Status::Created, &product))
    }
}

#[async_trait]
impl ProxyHandler for AddProductFunction {
    async fn handle(&self, request: ProxyRequest) -> ProxyResponse {
        respond(self.run(&request).await)
    }
}

/// `GET` with an `id` path parameter
pub struct GetProductFunction {
    use_case: Arc<GetProductUseCase>,
    guard: HttpMethodGuard,
}

impl GetProductFunction {
    pub fn new(use_case: Arc<GetProductUseCase>) -> Self {
        Self {
            use_case,
            guard: HttpMethodGuard::new([Method::Get]),
        }
    }

    async fn run(&self, request: &ProxyRequest) -> HandlerResult {
        self.guard.check(&request.http_method)?;
        let input = GetProductInput {
            id: request.path_parameter(ID_PATH_PARAMETER).to_string(),
        };
        let product = self.use_case.execute(input).await?;
        Ok(ProxyResponse::json(Status::Ok, &product))
    }
}

#[async_trait]
impl ProxyHandler for GetProductFunction {
    async fn handle(&self, request: ProxyRequest) -> ProxyResponse {
        respond(self.run(&request).await)
    }
}

/// `GET` without parameters
pub struct GetAllProductsFunction {
    use_case: Arc<GetAllProductsUseCase>,
    guard: HttpMethodGuard,
}

impl GetAllProductsFunction {
    pub fn new(use_case: Arc<GetAllProductsUseCase>) -> Self {
        Self {
            use_case,
            guard: HttpMethodGuard::new([Method::Get]),
        }
    }

    async fn run(&self, request: &ProxyRequest) -> HandlerResult {
        self.guard.check(&request.http_method)?;
        let products = self.use_case.execute().await?;
        Ok(ProxyResponse::json(Status::Ok, &products))
    }
}

#[async_trait]
impl ProxyHandler for GetAllProductsFunction {
    async fn handle(&self, request: ProxyRequest) -> ProxyResponse {
        respond(self.run(&request).await)
    }
}

/// `PUT` or `PATCH` with an `id` path parameter; absent body fields are kept
pub struct UpdateProductFunction {
    use_case: Arc<UpdateProductUseCase>,
    guard: HttpMethodGuard,
}

impl UpdateProductFunction {
    pub fn new(use_case: Arc<UpdateProductUseCase>) -> Self {
        Self {
            use_case,
            guard: HttpMethodGuard::new([Method::Put, Method::Patch]),
        }
    }

    async fn run(&self, request: &ProxyRequest) -> HandlerResult {
        self.guard.check(&request.http_method)?;
        let mut input: UpdateProductInput = parse_body(request.body())?;
        input.id = request.path_parameter(ID_PATH_PARAMETER).to_string();
        let product = self.use_case.execute(input).await?;
        Ok(ProxyResponse::json(Status::Ok, &product))
    }
}

#[async_trait]
impl ProxyHandler for UpdateProductFunction {
    async fn handle(&self, request: ProxyRequest) -> ProxyResponse {
        respond(self.run(&request).await)
    }
}

/// `DELETE` with an `id` path parameter; answers 204 without a body
pub struct DeleteProductFunction {
    use_case: Arc<DeleteProductUseCase>,
    guard: HttpMethodGuard,
}

impl DeleteProductFunction {
    pub fn new(use_case: Arc<DeleteProductUseCase>) -> Self {
        Self {
            use_case,
            guard: HttpMethodGuard::new([Method::Delete]),
        }
    }

    async fn run(&self, request: &ProxyRequest) -> HandlerResult {
        self.guard.check(&request.http_method)?;
        let input = DeleteProductInput {
            id: request.path_parameter(ID_PATH_PARAMETER).to_string(),
        };
        self.use_case.execute(input).await?;
        Ok(ProxyResponse::empty(Status::NoContent))
    }
}

#[async_trait]
impl ProxyHandler for DeleteProductFunction {
    async fn handle(&self, request: ProxyRequest) -> ProxyResponse {
        respond(self.run(&request).await)
    }
}
