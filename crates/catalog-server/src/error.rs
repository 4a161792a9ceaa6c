//! Client-facing errors
//!
//! Both transports turn a failed operation into an [`ApiError`]: a status
//! plus a message rendered as `{"error": "..."}`.
//!
//! | Domain error | Status |
//! |--------------|--------|
//! | invalid id / name / description / price | 400 |
//! | malformed JSON body | 400 |
//! | product already exists | 409 |
//! | product not found | 404 |
//! | anything else | 500, message replaced by `some service error` |

use crate::constants::{ERR_INVALID_JSON, ERR_METHOD_NOT_ALLOWED, ERR_SERVICE};
use catalog_domain::error::Error;
use rocket::Request;
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// An error ready to be sent to a client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: Status,
    message: String,
}

impl ApiError {
    pub fn new(status: Status, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 405 `method not allowed`
    pub fn method_not_allowed() -> Self {
        Self::new(Status::MethodNotAllowed, ERR_METHOD_NOT_ALLOWED)
    }

    /// 400 `invalid JSON`
    pub fn invalid_json() -> Self {
        Self::new(Status::BadRequest, ERR_INVALID_JSON)
    }

    /// 500 `some service error`
    pub fn service() -> Self {
        Self::new(Status::InternalServerError, ERR_SERVICE)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            error: self.message.clone(),
        }
    }

    /// The body serialized as a JSON string
    pub fn to_json(&self) -> String {
        serde_json::json!({ "error": self.message }).to_string()
    }
}

/// Status a domain error is reported with
pub fn status_for(error: &Error) -> Status {
    match error {
        e if e.is_validation() => Status::BadRequest,
        Error::Json { .. } => Status::BadRequest,
        Error::AlreadyExists => Status::Conflict,
        Error::NotFound => Status::NotFound,
        _ => Status::InternalServerError,
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let status = status_for(&error);
        if status == Status::InternalServerError {
            error!(error = %error, "Operation failed");
            return Self::service();
        }
        if matches!(error, Error::Json { .. }) {
            return Self::invalid_json();
        }
        Self::new(status, error.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body())).respond_to(request)
    }
}

/// Deserialize a request body, reporting any failure as `invalid JSON`
pub fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| {
        debug!(error = %e, "Rejected request body");
        ApiError::invalid_json()
    })
}
