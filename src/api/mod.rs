// API layer - HTTP endpoints
pub mod analytics;
pub mod collection_requests;
pub mod health;
pub mod owners;
pub mod upload_limit;
pub mod waste_items;

use std::sync::Arc;

use poem::endpoint::StaticFilesEndpoint;
use poem::{EndpointExt, Route};
use poem_openapi::{OpenApiService, Tags};

pub use analytics::AnalyticsApi;
pub use collection_requests::CollectionRequestsApi;
pub use health::HealthApi;
pub use owners::OwnersApi;
pub use upload_limit::UploadLimit;
pub use waste_items::WasteItemsApi;

use crate::app_data::AppData;

/// API tags for record endpoints
#[derive(Tags)]
pub enum RecordTags {
    /// Owners registering e-waste
    Owners,
    /// E-waste items and their uploads
    WasteItems,
    /// Pickup requests for e-waste items
    CollectionRequests,
    /// Dashboard figures
    Analytics,
}

/// Compose every API under `/api`, Swagger UI under `/swagger` and stored
/// uploads under `/media`
///
/// `/api` bodies are capped at what the largest valid upload form needs.
pub fn build_app(app_data: Arc<AppData>, server_url: &str) -> Route {
    let media_root = app_data.media_storage.root().to_path_buf();
    let max_request_bytes = app_data.record_validator.rules().max_request_bytes();

    let api_service = OpenApiService::new(
        (
            HealthApi::new(app_data.clone()),
            OwnersApi::new(app_data.clone()),
            WasteItemsApi::new(app_data.clone()),
            CollectionRequestsApi::new(app_data.clone()),
            AnalyticsApi::new(app_data),
        ),
        "E-Waste Records API",
        env!("CARGO_PKG_VERSION"),
    )
    .server(server_url);

    let ui = api_service.swagger_ui();

    Route::new()
        .nest("/api", api_service.with(UploadLimit::new(max_request_bytes)))
        .nest("/swagger", ui)
        .nest("/media", StaticFilesEndpoint::new(media_root))
}
