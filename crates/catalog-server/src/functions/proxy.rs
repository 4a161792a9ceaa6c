//! API-Gateway style proxy events
//!
//! Field names follow the gateway's camelCase JSON. Map-valued fields may be
//! `null` in real events, hence the `Option`s.

use crate::constants::JSON_CONTENT_TYPE;
use crate::error::ApiError;
use rocket::http::Status;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::error;

/// Incoming proxy event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProxyRequest {
    pub http_method: String,
    pub path: String,
    pub headers: Option<HashMap<String, String>>,
    pub path_parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
}

impl ProxyRequest {
    pub fn new(http_method: impl Into<String>) -> Self {
        Self {
            http_method: http_method.into(),
            ..Self::default()
        }
    }

    pub fn with_path_parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_parameters
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Value of a path parameter, empty when absent
    pub fn path_parameter(&self, name: &str) -> &str {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map_or("", String::as_str)
    }

    /// Request body, empty when absent
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// Outgoing proxy response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default)]
    pub body: String,
}

impl ProxyResponse {
    /// Response with `payload` serialized as the JSON body
    pub fn json<T: Serialize>(status: Status, payload: &T) -> Self {
        match serde_json::to_string(payload) {
            Ok(body) => Self::with_body(status, body),
            Err(e) => {
                error!(error = %e, "Failed to serialize response body");
                Self::from(ApiError::service())
            }
        }
    }

    /// Response without a body
    pub fn empty(status: Status) -> Self {
        Self {
            status_code: status.code,
            headers: HashMap::new(),
            body: String::new(),
        }
    }

    fn with_body(status: Status, body: String) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
        Self {
            status_code: status.code,
            headers,
            body,
        }
    }
}

impl From<ApiError> for ProxyResponse {
    fn from(error: ApiError) -> Self {
        Self::with_body(error.status(), error.to_json())
    }
}
