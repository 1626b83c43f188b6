// Services layer - Pure business rules and media persistence
pub mod media_storage;
pub mod record_validator;

pub use media_storage::{MediaKind, MediaStorage};
pub use record_validator::RecordValidator;
