use std::fmt;
use thiserror::Error;

/// The three record kinds managed by this service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Owner,
    WasteItem,
    CollectionRequest,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Owner => write!(f, "Owner"),
            EntityKind::WasteItem => write!(f, "Waste item"),
            EntityKind::CollectionRequest => write!(f, "Collection request"),
        }
    }
}

/// Record store specific errors
#[derive(Error, Debug)]
pub enum RecordError {
    /// Record (or a record it references) does not exist
    #[error("{entity} with ID {id} not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// Caller may not act on this record; enforcement happens upstream
    #[error("Permission denied: {reason}")]
    PermissionDenied { reason: String },
}
