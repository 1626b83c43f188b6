use thiserror::Error;

pub mod database;
pub mod record;
pub mod validation;

pub use database::DatabaseError;
pub use record::{EntityKind, RecordError};
pub use validation::ValidationError;

/// Internal error type for store, service and coordinator operations
///
/// Hybrid design separates infrastructure errors (shared) from domain errors.
/// Not exposed via API - endpoints must convert through `ApiError::from_internal_error`.
#[derive(Error, Debug)]
pub enum InternalError {
    // ============================================================
    // Infrastructure Errors
    // ============================================================
    #[error(transparent)]
    Database(#[from] DatabaseError),

    /// Media file could not be written or removed
    #[error("Storage error: {operation} failed: {source}")]
    Storage {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    // ============================================================
    // Domain Errors
    // ============================================================
    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl InternalError {
    /// Create a database error with context
    pub fn database(operation: &str, source: sea_orm::DbErr) -> InternalError {
        InternalError::Database(DatabaseError::Operation {
            operation: operation.to_string(),
            source,
        })
    }

    /// Create a storage error with context
    pub fn storage(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Storage {
            operation: operation.into(),
            source,
        }
    }

    /// Referenced record does not exist
    pub fn not_found(entity: EntityKind, id: i64) -> Self {
        Self::Record(RecordError::NotFound { entity, id })
    }
}
