// Coordinators layer - Workflow orchestration
//
// Coordinators sequence validation, transactions and store calls for each
// API endpoint. Business rules live in the validator; data access in stores.

pub mod analytics_coordinator;
pub mod collection_request_coordinator;
pub mod owner_coordinator;
pub mod waste_item_coordinator;

pub use analytics_coordinator::AnalyticsCoordinator;
pub use collection_request_coordinator::CollectionRequestCoordinator;
pub use owner_coordinator::OwnerCoordinator;
pub use waste_item_coordinator::WasteItemCoordinator;
