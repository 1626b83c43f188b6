use crate::errors::internal::{InternalError, RecordError, ValidationError};
use poem_openapi::{ApiResponse, Object, payload::Json};
use std::collections::BTreeMap;
use std::fmt;

/// Uniform error envelope returned by every endpoint
#[derive(Object, Debug, Clone)]
pub struct ErrorResponse {
    /// Error kind tag (validation_error, permission_denied, not_found, internal_error)
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// HTTP status code
    pub status_code: u16,

    /// Field-keyed messages, present for validation failures
    #[oai(skip_serializing_if_is_none)]
    pub fields: Option<BTreeMap<String, Vec<String>>>,
}

/// Record operation error types
#[derive(ApiResponse, Debug)]
#[oai(bad_request_handler = "bad_request_handler")]
pub enum ApiError {
    /// Submitted data failed validation
    #[oai(status = 400)]
    ValidationFailed(Json<ErrorResponse>),

    /// Caller is not allowed to perform the operation
    #[oai(status = 403)]
    PermissionDenied(Json<ErrorResponse>),

    /// Record or referenced record not found
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),

    /// Internal server error
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Requests poem-openapi could not parse get the same envelope as
/// validation failures.
fn bad_request_handler(err: poem::Error) -> ApiError {
    ApiError::ValidationFailed(Json(ErrorResponse {
        error: "validation_error".to_string(),
        message: err.to_string(),
        status_code: 400,
        fields: None,
    }))
}

impl ApiError {
    /// Create a ValidationFailed error carrying every field message
    pub fn validation_failed(errors: ValidationError) -> Self {
        ApiError::ValidationFailed(Json(ErrorResponse {
            error: "validation_error".to_string(),
            message: "Invalid input.".to_string(),
            status_code: 400,
            fields: Some(errors.into_fields()),
        }))
    }

    /// Create a PermissionDenied error
    pub fn permission_denied(reason: String) -> Self {
        ApiError::PermissionDenied(Json(ErrorResponse {
            error: "permission_denied".to_string(),
            message: reason,
            status_code: 403,
            fields: None,
        }))
    }

    /// Create a NotFound error
    pub fn not_found(message: String) -> Self {
        ApiError::NotFound(Json(ErrorResponse {
            error: "not_found".to_string(),
            message,
            status_code: 404,
            fields: None,
        }))
    }

    /// Convert InternalError to ApiError
    ///
    /// This is the explicit conversion point from internal errors to API errors.
    /// Internal error details are logged but not exposed to clients.
    pub fn from_internal_error(err: InternalError) -> Self {
        match err {
            InternalError::Validation(errors) => {
                tracing::warn!("Validation error: {}", errors);
                Self::validation_failed(errors)
            }
            InternalError::Record(RecordError::NotFound { .. }) => {
                let message = err.to_string();
                tracing::warn!("{}", message);
                Self::not_found(message)
            }
            InternalError::Record(RecordError::PermissionDenied { reason }) => {
                tracing::warn!("Permission denied: {}", reason);
                Self::permission_denied(reason)
            }

            // Infrastructure errors - always log and return generic error
            InternalError::Database(_) | InternalError::Storage { .. } => {
                tracing::error!("Unexpected error in record operation: {}", err);
                Self::internal_server_error()
            }
        }
    }

    /// Create a generic internal server error
    ///
    /// Always returns a generic message without exposing internal details.
    fn internal_server_error() -> Self {
        ApiError::InternalError(Json(ErrorResponse {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred.".to_string(),
            status_code: 500,
            fields: None,
        }))
    }

    fn response(&self) -> &ErrorResponse {
        match self {
            ApiError::ValidationFailed(json) => &json.0,
            ApiError::PermissionDenied(json) => &json.0,
            ApiError::NotFound(json) => &json.0,
            ApiError::InternalError(json) => &json.0,
        }
    }

    /// Get the error message from the error variant
    pub fn message(&self) -> String {
        self.response().message.clone()
    }

    /// Get the HTTP status code from the error variant
    pub fn status_code(&self) -> u16 {
        self.response().status_code
    }

    /// Get the error kind tag from the error variant
    pub fn kind(&self) -> &str {
        &self.response().error
    }

    /// Field-keyed messages, if this is a validation failure
    pub fn fields(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        self.response().fields.as_ref()
    }
}

impl From<InternalError> for ApiError {
    fn from(err: InternalError) -> Self {
        Self::from_internal_error(err)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
