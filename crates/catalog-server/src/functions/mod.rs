//! Serverless function transport
//!
//! Each product operation is a standalone [`ProxyHandler`] taking an
//! API-Gateway style [`ProxyRequest`] and answering with a [`ProxyResponse`].
//!
//! | Function | Methods | Success |
//! |----------|---------|---------|
//! | `add` | `POST` | 201 |
//! | `get` | `GET` | 200 |
//! | `list` | `GET` | 200 |
//! | `update` | `PUT`, `PATCH` | 200 |
//! | `delete` | `DELETE` | 204 |

pub mod guard;
pub mod handlers;
pub mod proxy;

pub use guard::HttpMethodGuard;
pub use handlers::{
    AddProductFunction, DeleteProductFunction, GetAllProductsFunction, GetProductFunction,
    ProxyHandler, UpdateProductFunction,
};
pub use proxy::{ProxyRequest, ProxyResponse};

use catalog_domain::error::Result;
use catalog_infrastructure::AppContext;
use std::fmt;
use std::sync::Arc;
use tracing::info;

/// Selects one of the five functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum FunctionKind {
    Add,
    Get,
    List,
    Update,
    Delete,
}

impl FunctionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Get => "get",
            Self::List => "list",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for FunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Handler for `kind`, wired to the use cases of `app`
pub fn function_for(kind: FunctionKind, app: &AppContext) -> Arc<dyn ProxyHandler> {
    match kind {
        FunctionKind::Add => Arc::new(AddProductFunction::new(app.add_product())),
        FunctionKind::Get => Arc::new(GetProductFunction::new(app.get_product())),
        FunctionKind::List => Arc::new(GetAllProductsFunction::new(app.get_all_products())),
        FunctionKind::Update => Arc::new(UpdateProductFunction::new(app.update_product())),
        FunctionKind::Delete => Arc::new(DeleteProductFunction::new(app.delete_product())),
    }
}

/// Decode one JSON event, run it through `kind` and encode the response
///
/// # Errors
///
/// [`Error::Json`](catalog_domain::Error::Json) when `event` is not a proxy
/// request. Operation failures are not errors here; they come back as
/// error responses.
pub async fn invoke(kind: FunctionKind, app: &AppContext, event: &str) -> Result<String> {
    let request: ProxyRequest = serde_json::from_str(event)?;
    info!(function = %kind, method = %request.http_method, "Invoking function");
    let response = function_for(kind, app).handle(request).await;
    info!(function = %kind, status = response.status_code, "Function finished");
    Ok(serde_json::to_string(&response)?)
}
