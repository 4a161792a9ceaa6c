//! Request method guard for serverless functions

use crate::error::ApiError;
use rocket::http::Method;

/// Accepts a request only when its method is in the allowed set
///
/// Methods compare case-insensitively, so `"post"` passes a guard built
/// with [`Method::Post`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpMethodGuard {
    allowed: Vec<Method>,
}

impl HttpMethodGuard {
    pub fn new(allowed: impl IntoIterator<Item = Method>) -> Self {
        Self {
            allowed: allowed.into_iter().collect(),
        }
    }

    pub fn allowed(&self) -> &[Method] {
        &self.allowed
    }

    pub fn is_allowed(&self, method: &str) -> bool {
        let method = method.trim();
        self.allowed
            .iter()
            .any(|allowed| allowed.as_str().eq_ignore_ascii_case(method))
    }

    /// # Errors
    ///
    /// 405 `method not allowed` when `method` is not in the set.
    pub fn check(&self, method: &str) -> Result<(), ApiError> {
        if self.is_allowed(method) {
            Ok(())
        } else {
            Err(ApiError::method_not_allowed())
        }
    }
}
