use poem_openapi::{ApiResponse, Object};

use crate::errors::internal::ValidationError;
use crate::services::record_validator::FIELD_REQUIRED;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,

    /// Records database reachability
    pub database: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}

/// Successful delete
#[derive(ApiResponse, Debug)]
pub enum RecordDeleted {
    /// Record and everything referencing it were removed
    #[oai(status = 204)]
    NoContent,
}

/// Take a required body field, recording a "required" error when absent
pub fn require<T>(errors: &mut ValidationError, field: &str, value: Option<T>) -> Option<T> {
    if value.is_none() {
        errors.add(field, FIELD_REQUIRED);
    }
    value
}

/// Report missing fields together with every rule the supplied fields break
///
/// Missing fields carry placeholder values in `candidate`; their own
/// messages are replaced by the "required" ones.
pub fn check_complete<C, V>(
    required: ValidationError,
    candidate: C,
    validate: impl FnOnce(C) -> Result<V, ValidationError>,
) -> Result<C, ValidationError> {
    if required.is_empty() {
        return Ok(candidate);
    }

    match validate(candidate) {
        Ok(_) => Err(required),
        Err(errors) => Err(required.absorb(errors)),
    }
}
