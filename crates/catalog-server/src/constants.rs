//! Server-specific constants
//!
//! Error messages sent to clients and the route prefix shared by the HTTP
//! server and the serverless functions.

// ============================================================================
// CLIENT ERROR MESSAGES
// ============================================================================

/// Sent with 405 when a function or route rejects the request method
pub const ERR_METHOD_NOT_ALLOWED: &str = "method not allowed";

/// Sent with 400 when the request body is not valid JSON for the operation
pub const ERR_INVALID_JSON: &str = "invalid JSON";

/// Sent with 500 in place of the underlying failure
pub const ERR_SERVICE: &str = "some service error";

// ============================================================================
// ROUTING
// ============================================================================

/// Path parameter carrying the product identifier
pub const ID_PATH_PARAMETER: &str = "id";

/// Content type of every response body
pub const JSON_CONTENT_TYPE: &str = "application/json";
