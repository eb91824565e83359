// HTTP API Error Types
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::{json, Value};

/// A single violated constraint inside an invalid payload.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub path: String,
    pub constraint: String,
}

impl Issue {
    pub fn new(path: impl Into<String>, constraint: impl Into<String>) -> Self {
        Self { path: path.into(), constraint: constraint.into() }
    }
}

/// HTTP API error with appropriate status codes and client-friendly messages.
///
/// Every variant renders as `{ "message": ... }`, with an `issues` array
/// added for payload validation failures.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),
    InvalidPayload { message: String, issues: Vec<Issue> },

    // 401 Unauthorized
    Unauthorized(String),

    // 404 Not Found
    NotFound(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // 503 Service Unavailable
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::InvalidPayload { .. } => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::NotFound(_) => 404,
            ApiError::InternalServerError(_) => 500,
            ApiError::ServiceUnavailable(_) => 503,
        }
    }

    /// Client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::InvalidPayload { message, .. } => message,
            ApiError::Unauthorized(msg) => msg,
            ApiError::NotFound(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
            ApiError::ServiceUnavailable(msg) => msg,
        }
    }

    /// Convert to the JSON response body
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::InvalidPayload { message, issues } => {
                json!({ "message": message, "issues": issues })
            }
            _ => json!({ "message": self.message() }),
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn invalid_payload(issues: Vec<Issue>) -> Self {
        ApiError::InvalidPayload { message: "Invalid payload".to_string(), issues }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn not_found() -> Self {
        ApiError::NotFound("Not found".to_string())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }

    pub fn service_unavailable(message: impl Into<String>) -> Self {
        ApiError::ServiceUnavailable(message.into())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut issues = Vec::new();
        for (field, field_errors) in errors.field_errors() {
            for err in field_errors.iter() {
                let constraint = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                issues.push(Issue::new(field.to_string(), constraint));
            }
        }
        ApiError::invalid_payload(issues)
    }
}

impl From<crate::database::DatabaseError> for ApiError {
    fn from(err: crate::database::DatabaseError) -> Self {
        match err {
            crate::database::DatabaseError::InvalidFieldName(field) => {
                ApiError::bad_request(format!("Invalid field name: {}", field))
            }
            crate::database::DatabaseError::NotReady => {
                ApiError::service_unavailable("Database not ready")
            }
            crate::database::DatabaseError::Sqlx(sqlx_err) => {
                // Don't expose internal SQL errors to clients
                tracing::error!("SQLx error: {}", sqlx_err);
                ApiError::internal_server_error("An error occurred while processing your request")
            }
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_errors_render_message_only() {
        let body = ApiError::not_found().to_json();
        assert_eq!(body, json!({ "message": "Not found" }));
        assert_eq!(ApiError::not_found().status_code(), 404);
    }

    #[test]
    fn invalid_payload_renders_issues() {
        let err = ApiError::invalid_payload(vec![Issue::new("center_lat", "range")]);
        let body = err.to_json();
        assert_eq!(body["message"], "Invalid payload");
        assert_eq!(body["issues"][0]["path"], "center_lat");
        assert_eq!(body["issues"][0]["constraint"], "range");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn database_not_ready_maps_to_503() {
        let err: ApiError = crate::database::DatabaseError::NotReady.into();
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.message(), "Database not ready");
    }

    #[test]
    fn invalid_field_name_maps_to_400() {
        let err: ApiError = crate::database::DatabaseError::InvalidFieldName("owner".into()).into();
        assert_eq!(err.status_code(), 400);
    }
}
