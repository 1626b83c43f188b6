use std::sync::Arc;

use poem::Request;
use poem_openapi::param::{Path, Query};
use poem_openapi::{payload::Json, OpenApi};

use crate::api::RecordTags;
use crate::app_data::AppData;
use crate::coordinators::WasteItemCoordinator;
use crate::errors::ApiError;
use crate::services::RecordValidator;
use crate::types::dto::common::RecordDeleted;
use crate::types::dto::waste_item::{
    WasteItemCreated, WasteItemForm, WasteItemPage, WasteItemResponse,
};
use crate::types::internal::context::RequestContext;
use crate::types::internal::listing::{PageRequest, WasteItemFilter};

/// Waste item endpoints
pub struct WasteItemsApi {
    waste_item_coordinator: Arc<WasteItemCoordinator>,
    record_validator: Arc<RecordValidator>,
}

impl WasteItemsApi {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            record_validator: Arc::clone(&app_data.record_validator),
            waste_item_coordinator: Arc::new(WasteItemCoordinator::new(app_data)),
        }
    }
}

#[OpenApi(tag = "RecordTags::WasteItems")]
impl WasteItemsApi {
    /// List waste items
    ///
    /// `search` terms are separated by spaces or commas and each must match
    /// the name, category or condition. `ordering` accepts created_at,
    /// updated_at or name, prefixed with `-` for descending.
    #[oai(path = "/ewaste-items", method = "get")]
    #[allow(clippy::too_many_arguments)]
    async fn list(
        &self,
        req: &Request,
        category: Query<Option<String>>,
        owner: Query<Option<i64>>,
        search: Query<Option<String>>,
        ordering: Query<Option<String>>,
        page: Query<Option<u64>>,
        page_size: Query<Option<u64>>,
    ) -> Result<Json<WasteItemPage>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let filter = WasteItemFilter {
            category: category.0,
            owner_id: owner.0,
            search: search.0,
            ordering: ordering.0,
        };
        let items = self
            .waste_item_coordinator
            .list(&ctx, filter, PageRequest::new(page.0, page_size.0))
            .await?;
        Ok(Json(items.into()))
    }

    /// Register a waste item with optional image and document
    #[oai(path = "/ewaste-items", method = "post")]
    async fn create(&self, req: &Request, form: WasteItemForm) -> Result<WasteItemCreated, ApiError> {
        let ctx = RequestContext::from_request(req);
        let candidate = form.into_candidate(&self.record_validator).await?;
        let item = self.waste_item_coordinator.create(&ctx, candidate).await?;
        Ok(WasteItemCreated::Created(Json(item.into())))
    }

    #[oai(path = "/ewaste-items/:id", method = "get")]
    async fn get(&self, req: &Request, id: Path<i64>) -> Result<Json<WasteItemResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let item = self.waste_item_coordinator.get(&ctx, id.0).await?;
        Ok(Json(item.into()))
    }

    /// Replace a waste item; omitted uploads keep the stored files
    #[oai(path = "/ewaste-items/:id", method = "put")]
    async fn update(
        &self,
        req: &Request,
        id: Path<i64>,
        form: WasteItemForm,
    ) -> Result<Json<WasteItemResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let candidate = form.into_candidate(&self.record_validator).await?;
        let item = self.waste_item_coordinator.update(&ctx, id.0, candidate).await?;
        Ok(Json(item.into()))
    }

    #[oai(path = "/ewaste-items/:id", method = "patch")]
    async fn patch(
        &self,
        req: &Request,
        id: Path<i64>,
        form: WasteItemForm,
    ) -> Result<Json<WasteItemResponse>, ApiError> {
        let ctx = RequestContext::from_request(req);
        let patch = form.into_patch().await?;
        let item = self.waste_item_coordinator.patch(&ctx, id.0, patch).await?;
        Ok(Json(item.into()))
    }

    /// Delete a waste item and its collection requests
    #[oai(path = "/ewaste-items/:id", method = "delete")]
    async fn delete(&self, req: &Request, id: Path<i64>) -> Result<RecordDeleted, ApiError> {
        let ctx = RequestContext::from_request(req);
        self.waste_item_coordinator.delete(&ctx, id.0).await?;
        Ok(RecordDeleted::NoContent)
    }
}
