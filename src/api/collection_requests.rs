use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi};

use crate::api::RecordTags;
use crate::app_data::AppData;
use crate::coordinators::CollectionRequestCoordinator;
use crate::errors::{ApiError, InternalError};
use crate::services::RecordValidator;
use crate::types::dto::collection_request::{
    CollectionRequestBody, CollectionRequestCreated, CollectionRequestPage,
    CollectionRequestPatchBody, CollectionRequestResponse,
};
use crate::types::dto::common::RecordDeleted;
use crate::types::internal::context::RequestContext;
use crate::types::internal::listing::PageRequest;

/// Collection request endpoints
pub struct CollectionRequestsApi {
    collection_request_coordinator: Arc<CollectionRequestCoordinator>,
    record_validator: Arc<RecordValidator>,
}

impl CollectionRequestsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            record_validator: Arc::clone(&app_data.record_validator),
            collection_request_coordinator: Arc::new(CollectionRequestCoordinator::new(app_data)),
        }
    }
}

#[OpenApi(tag = "RecordTags::CollectionRequests")]
impl CollectionRequestsApi {
    /// List collection requests ordered by id
    #[oai(path = "/collection-requests", method = "get")]
    async fn list(
        &self,
        req: &Request,
        page: Query<Option<u64>>,
        page_size: Query<Option<u64>>,
    ) -> Result<Json<CollectionRequestPage>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let requests = self
            .collection_request_coordinator
            .list(&ctx, PageRequest::new(page.0, page_size.0))
            .await?;
        Ok(Json(requests.into()))
    }

    /// Request pickup of a waste item
    ///
    /// `owner` is required. `cancelled` cannot be submitted; use the cancel
    /// endpoint.
    #[oai(path = "/collection-requests", method = "post")]
    async fn create(
        &self,
        req: &Request,
        body: Json<CollectionRequestBody>,
    ) -> Result<CollectionRequestCreated, ApiError> {
        let ctx = RequestContext::from_request(req);
        let candidate = body.0.into_candidate(&self.record_validator).map_err(InternalError::from)?;
        let request = self.collection_request_coordinator.create(&ctx, candidate).await?;
        Ok(CollectionRequestCreated::Created(Json(request.into())))
    }

    #[oai(path = "/collection-requests/:id", method = "get")]
    async fn get(
        &self,
        req: &Request,
        id: Path<i64>,
    ) -> Result<Json<CollectionRequestResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let request = self.collection_request_coordinator.get(&ctx, id.0).await?;
        Ok(Json(request.into()))
    }

    #[oai(path = "/collection-requests/:id", method = "put")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<CollectionRequestBody>,
    ) -> Result<Json<CollectionRequestResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let candidate = body.0.into_candidate(&self.record_validator).map_err(InternalError::from)?;
        let request = self
            .collection_request_coordinator
            .update(&ctx, id.0, candidate)
            .await?;
        Ok(Json(request.into()))
    }

    /// Update only the supplied fields; status is checked only if present
    #[oai(path = "/collection-requests/:id", method = "patch")]
    async fn patch(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<CollectionRequestPatchBody>,
    ) -> Result<Json<CollectionRequestResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let request = self
            .collection_request_coordinator
            .patch(&ctx, id.0, body.0.into())
            .await?;
        Ok(Json(request.into()))
    }

    /// Mark a collection request cancelled
    #[oai(path = "/collection-requests/:id/cancel", method = "post")]
    async fn cancel(
        &self,
        req: &Request,
        id: Path<i64>,
    ) -> Result<Json<CollectionRequestResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let request = self.collection_request_coordinator.cancel(&ctx, id.0).await?;
        Ok(Json(request.into()))
    }

    #[oai(path = "/collection-requests/:id", method = "delete")]
    async fn delete(&self, req: &Request, id: Path<i64>) -> Result<RecordDeleted, ApiError> {
        let ctx = RequestContext::from_request(req);
        self.collection_request_coordinator.delete(&ctx, id.0).await?;
        Ok(RecordDeleted::NoContent)
    }
}
