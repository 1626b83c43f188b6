// Database entities - SeaORM models
pub mod choices;
pub mod collection_request;
pub mod owner;
pub mod waste_item;

pub use choices::{ItemCategory, ItemCondition, RequestStatus};

/// Current time in Unix milliseconds, the representation used for every
/// `created_at`/`updated_at` column.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Render a stored millisecond timestamp as RFC 3339
pub fn format_millis(millis: i64) -> String {
    chrono::DateTime::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}
