// Internal types - never exposed over the API directly
pub mod analytics;
pub mod context;
pub mod listing;
pub mod records;
pub mod submissions;
