use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::errors::internal::ValidationError;
use crate::errors::InternalError;
use crate::services::record_validator::EMAIL_TAKEN;
use crate::services::RecordValidator;
use crate::stores::{CollectionRequestStore, OwnerStore, WasteItemStore};
use crate::types::db::owner;
use crate::types::internal::context::RequestContext;
use crate::types::internal::listing::PageRequest;
use crate::types::internal::records::{DeletionSummary, Page};
use crate::types::internal::submissions::{OwnerCandidate, OwnerPatch, ValidOwner};
use sea_orm::ConnectionTrait;

/// Owner workflows: validate, check email uniqueness, persist, cascade
pub struct OwnerCoordinator {
    connections: DatabaseConnections,
    record_validator: Arc<RecordValidator>,
    owner_store: Arc<OwnerStore>,
    waste_item_store: Arc<WasteItemStore>,
    collection_request_store: Arc<CollectionRequestStore>,
}

impl OwnerCoordinator {
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
        candidate: OwnerCandidate,
    ) -> Result<owner::Model, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, "Creating owner");

        let email = candidate.email.trim().to_string();
        let validated = self.record_validator.validate_owner(candidate);

        let txn = self.connections.begin_transaction().await?;
        let owner = self.unique_email(&txn, &email, None, validated).await?;
        let created = self.owner_store.insert(&txn, owner).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::info!(request_id = %ctx.request_id, owner_id = created.id, "Owner created");
        Ok(created)
    }

    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<owner::Model, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, owner_id = id, "Fetching owner");
        self.owner_store.get(&self.connections.records, id).await
    }

    pub async fn list(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<Page<owner::Model>, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, page = page.page, "Listing owners");
        self.owner_store.list(&self.connections.records, page).await
    }

    /// Replace every field of an owner
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        candidate: OwnerCandidate,
    ) -> Result<owner::Model, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, owner_id = id, "Updating owner");

        let txn = self.connections.begin_transaction().await?;
        let existing = self.owner_store.get(&txn, id).await?;

        let email = candidate.email.trim().to_string();
        let validated = self.record_validator.validate_owner(candidate);
        let owner = self.unique_email(&txn, &email, Some(id), validated).await?;

        let updated = self.owner_store.update(&txn, existing, owner).await?;
        DatabaseConnections::commit_transaction(txn).await?;

        tracing::info!(request_id = %ctx.request_id, owner_id = id, "Owner updated");
        Ok(updated)
    }

    /// Merge supplied fields over the stored owner, then validate the result
    pub async fn patch(
        &self,
        ctx: &RequestContext,
        id: i64,
        patch: OwnerPatch,
    ) -> Result<owner::Model, InternalError> {
        let existing = self.owner_store.get(&self.connections.records, id).await?;
        self.update(ctx, id, patch.merge_into(&existing)).await
    }

    /// Delete an owner with everything that references it
    ///
    /// Removes requests on the owner's items, requests the owner filed, the
    /// items, then the owner, in one transaction.
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<DeletionSummary, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, owner_id = id, "Deleting owner");

        let txn = self.connections.begin_transaction().await?;
        self.owner_store.get(&txn, id).await?;

        let item_ids = self.waste_item_store.ids_owned_by(&txn, id).await?;
        let mut collection_requests = self
            .collection_request_store
            .delete_for_items(&txn, &item_ids)
            .await?;
        collection_requests += self.collection_request_store.delete_for_owner(&txn, id).await?;
        let waste_items = self.waste_item_store.delete_by_ids(&txn, &item_ids).await?;
        let owners = self.owner_store.delete(&txn, id).await?;

        DatabaseConnections::commit_transaction(txn).await?;

        let summary = DeletionSummary {
            owners,
            waste_items,
            collection_requests,
        };
        tracing::info!(request_id = %ctx.request_id, owner_id = id, ?summary, "Owner deleted");
        Ok(summary)
    }

    /// Fold the email uniqueness check into the validation outcome
    async fn unique_email(
        &self,
        conn: &impl ConnectionTrait,
        email: &str,
        exclude_id: Option<i64>,
        validated: Result<ValidOwner, ValidationError>,
    ) -> Result<ValidOwner, InternalError> {
        let mut errors = ValidationError::new();
        if !email.is_empty() && self.owner_store.email_in_use(conn, email, exclude_id).await? {
            errors.add("email", EMAIL_TAKEN);
        }

        Ok(errors.join(validated)?)
    }
}
