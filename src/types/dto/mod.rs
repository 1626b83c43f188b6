// API data transfer objects
pub mod analytics;
pub mod collection_request;
pub mod common;
pub mod owner;
pub mod waste_item;
