use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi};

use crate::api::RecordTags;
use crate::app_data::AppData;
use crate::coordinators::OwnerCoordinator;
use crate::errors::{ApiError, InternalError};
use crate::services::RecordValidator;
use crate::types::dto::common::RecordDeleted;
use crate::types::dto::owner::{
    OwnerCreated, OwnerPage, OwnerPatchRequest, OwnerRequest, OwnerResponse,
};
use crate::types::internal::context::RequestContext;
use crate::types::internal::listing::PageRequest;

/// Owner endpoints
pub struct OwnersApi {
    owner_coordinator: Arc<OwnerCoordinator>,
    record_validator: Arc<RecordValidator>,
}

impl OwnersApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            record_validator: Arc::clone(&app_data.record_validator),
            owner_coordinator: Arc::new(OwnerCoordinator::new(app_data)),
        }
    }
}

#[OpenApi(tag = "RecordTags::Owners")]
impl OwnersApi {
    /// List owners ordered by id
    #[oai(path = "/owners", method = "get")]
    async fn list(
        &self,
        req: &Request,
        page: Query<Option<u64>>,
        page_size: Query<Option<u64>>,
    ) -> Result<Json<OwnerPage>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let owners = self
            .owner_coordinator
            .list(&ctx, PageRequest::new(page.0, page_size.0))
            .await?;
        Ok(Json(owners.into()))
    }

    /// Register an owner
    #[oai(path = "/owners", method = "post")]
    async fn create(&self, req: &Request, body: Json<OwnerRequest>) -> Result<OwnerCreated, ApiError> {
        let ctx = RequestContext::from_request(req);
        let candidate = body.0.into_candidate(&self.record_validator).map_err(InternalError::from)?;
        let owner = self.owner_coordinator.create(&ctx, candidate).await?;
        Ok(OwnerCreated::Created(Json(owner.into())))
    }

    #[oai(path = "/owners/:id", method = "get")]
    async fn get(&self, req: &Request, id: Path<i64>) -> Result<Json<OwnerResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let owner = self.owner_coordinator.get(&ctx, id.0).await?;
        Ok(Json(owner.into()))
    }

    /// Replace every field of an owner
    #[oai(path = "/owners/:id", method = "put")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<OwnerRequest>,
    ) -> Result<Json<OwnerResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let candidate = body.0.into_candidate(&self.record_validator).map_err(InternalError::from)?;
        let owner = self.owner_coordinator.update(&ctx, id.0, candidate).await?;
        Ok(Json(owner.into()))
    }

    /// Update only the supplied fields
    #[oai(path = "/owners/:id", method = "patch")]
    async fn patch(
        &self,
        req: &Request,
        id: Path<i64>,
        body: Json<OwnerPatchRequest>,
    ) -> Result<Json<OwnerResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let owner = self.owner_coordinator.patch(&ctx, id.0, body.0.into()).await?;
        Ok(Json(owner.into()))
    }

    /// Delete an owner, their items and every related collection request
    #[oai(path = "/owners/:id", method = "delete")]
    async fn delete(&self, req: &Request, id: Path<i64>) -> Result<RecordDeleted, ApiError> {
        let ctx = RequestContext::from_request(req);
        self.owner_coordinator.delete(&ctx, id.0).await?;
        Ok(RecordDeleted::NoContent)
    }
}
