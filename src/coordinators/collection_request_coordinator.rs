use std::sync::Arc;

use sea_orm::ConnectionTrait;

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::errors::internal::EntityKind;
use crate::errors::InternalError;
use crate::services::RecordValidator;
use crate::stores::{CollectionRequestStore, OwnerStore, WasteItemStore};
use crate::types::db::{collection_request, RequestStatus};
use crate::types::internal::context::RequestContext;
use crate::types::internal::listing::PageRequest;
use crate::types::internal::records::{CollectionRequestRecord, DeletionSummary, Page};
use crate::types::internal::submissions::{
    CollectionRequestCandidate, CollectionRequestFields, CollectionRequestPatch,
    ValidCollectionRequest,
};

/// Collection request workflows
///
/// Submitted statuses are limited to the submittable set; `cancel` is the
/// only way a request becomes cancelled.
pub struct CollectionRequestCoordinator {
    connections: DatabaseConnections,
    record_validator: Arc<RecordValidator>,
    owner_store: Arc<OwnerStore>,
    waste_item_store: Arc<WasteItemStore>,
    collection_request_store: Arc<CollectionRequestStore>,
}

impl CollectionRequestCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            connections: app_data.connections.clone(),
            record_validator: Arc::clone(&app_data.record_validator),
            owner_store: Arc::clone(&app_data.owner_store),
            waste_item_store: Arc::clone(&app_data.waste_item_store),
            collection_request_store: Arc::clone(&app_data.collection_request_store),
        }
    }

    pub async fn create(
        &self,
        ctx: &RequestContext,
        candidate: CollectionRequestCandidate,
    ) -> Result<CollectionRequestRecord, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, "Creating collection request");

        let request = self.record_validator.validate_collection_request(candidate)?;

        let txn = self.connections.begin_transaction().await?;
        let (owner_name, item_name) = self.referenced_names(&txn, &request).await?;

        let created = self
            .collection_request_store
            .insert(
                &txn,
                CollectionRequestFields {
                    owner_id: request.owner_id,
                    item_id: request.item_id,
                    status: request.status.unwrap_or_default(),
                    pickup_date: request.pickup_date,
                },
            )
            .await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::info!(request_id = %ctx.request_id, collection_request_id = created.id, "Collection request created");

        Ok(CollectionRequestRecord {
            request: created,
            owner_name,
            item_name,
        })
    }

    pub async fn get(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> Result<CollectionRequestRecord, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, collection_request_id = id, "Fetching collection request");

        let conn = &self.connections.records;
        let request = self.collection_request_store.get(conn, id).await?;
        self.describe_one(conn, request).await
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<Page<CollectionRequestRecord>, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, page = page.page, "Listing collection requests");
        self.collection_request_store
            .list(&self.connections.records, page)
            .await
    }

    /// Replace a request
    ///
    /// A missing status or pickup date keeps the stored value.
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        candidate: CollectionRequestCandidate,
    ) -> Result<CollectionRequestRecord, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, collection_request_id = id, "Updating collection request");

        let txn = self.connections.begin_transaction().await?;
        let existing = self.collection_request_store.get(&txn, id).await?;

        let request = self.record_validator.validate_collection_request(candidate)?;
        let (owner_name, item_name) = self.referenced_names(&txn, &request).await?;

        let fields = CollectionRequestFields {
            owner_id: request.owner_id,
            item_id: request.item_id,
            status: request.status.unwrap_or(existing.status),
            pickup_date: request.pickup_date.or(existing.pickup_date),
        };
        let updated = self
            .collection_request_store
            .update(&txn, existing, fields)
            .await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::info!(request_id = %ctx.request_id, collection_request_id = id, "Collection request updated");

        Ok(CollectionRequestRecord {
            request: updated,
            owner_name,
            item_name,
        })
    }

    pub async fn patch(
        &self,
        ctx: &RequestContext,
        id: i64,
        patch: CollectionRequestPatch,
    ) -> Result<CollectionRequestRecord, InternalError> {
        let existing = self
            .collection_request_store
            .get(&self.connections.records, id)
            .await?;
        self.update(ctx, id, patch.merge_into(&existing)).await
    }

    /// Mark a request cancelled
    pub async fn cancel(
        &self,
        ctx: &RequestContext,
        id: i64,
    ) -> Result<CollectionRequestRecord, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, collection_request_id = id, "Cancelling collection request");

        let txn = self.connections.begin_transaction().await?;
        let existing = self.collection_request_store.get(&txn, id).await?;
        let cancelled = self
            .collection_request_store
            .set_status(&txn, existing, RequestStatus::Cancelled)
            .await?;
        let record = self.describe_one(&txn, cancelled).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::info!(request_id = %ctx.request_id, collection_request_id = id, "Collection request cancelled");
        Ok(record)
    }

    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<DeletionSummary, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, collection_request_id = id, "Deleting collection request");

        let txn = self.connections.begin_transaction().await?;
        self.collection_request_store.get(&txn, id).await?;
        let collection_requests = self.collection_request_store.delete(&txn, id).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::info!(request_id = %ctx.request_id, collection_request_id = id, "Collection request deleted");
        Ok(DeletionSummary {
            collection_requests,
            ..Default::default()
        })
    }

    /// Both referenced records must exist; returns their names
    async fn referenced_names(
        &self,
        conn: &impl ConnectionTrait,
        request: &ValidCollectionRequest,
    ) -> Result<(String, String), InternalError> {
        let owner = self.owner_store.get(conn, request.owner_id).await?;
        let item = self.waste_item_store.get(conn, request.item_id).await?;
        Ok((owner.name, item.name))
    }

    async fn describe_one(
        &self,
        conn: &impl ConnectionTrait,
        request: collection_request::Model,
    ) -> Result<CollectionRequestRecord, InternalError> {
        let id = request.id;
        self.collection_request_store
            .describe(conn, vec![request])
            .await?
            .pop()
            .ok_or_else(|| InternalError::not_found(EntityKind::CollectionRequest, id))
    }
}
