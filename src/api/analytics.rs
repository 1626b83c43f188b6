use std::sync::Arc;

use poem::Request;
use poem_openapi::{payload::Json, OpenApi};

use crate::api::RecordTags;
use crate::app_data::AppData;
use crate::coordinators::AnalyticsCoordinator;
use crate::errors::ApiError;
use crate::types::dto::analytics::AnalyticsResponse;
use crate::types::internal::context::RequestContext;

/// Dashboard endpoint
pub struct AnalyticsApi {
    analytics_coordinator: Arc<AnalyticsCoordinator>,
}

impl AnalyticsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            analytics_coordinator: Arc::new(AnalyticsCoordinator::new(app_data)),
        }
    }
}

#[OpenApi(tag = "RecordTags::Analytics")]
impl AnalyticsApi {
    /// Totals, items per category, requests per status and items per owner
    #[oai(path = "/analytics", method = "get")]
    async fn analytics(&self, req: &Request) -> Result<Json<AnalyticsResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let snapshot = self.analytics_coordinator.snapshot(&ctx).await?;
        Ok(Json(snapshot.into()))
    }
}
