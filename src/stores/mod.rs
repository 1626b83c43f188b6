// Stores layer - Data access over SeaORM entities
pub mod analytics_store;
pub mod collection_request_store;
pub mod owner_store;
pub mod waste_item_store;

pub use analytics_store::AnalyticsStore;
pub use collection_request_store::CollectionRequestStore;
pub use owner_store::OwnerStore;
pub use waste_item_store::WasteItemStore;
