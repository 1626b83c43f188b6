use std::sync::Arc;

use crate::app_data::AppData;
use crate::config::DatabaseConnections;
use crate::errors::internal::ValidationError;
use crate::errors::InternalError;
use crate::services::{MediaKind, MediaStorage, RecordValidator};
use crate::stores::{CollectionRequestStore, OwnerStore, WasteItemStore};
use crate::types::internal::context::RequestContext;
use crate::types::internal::listing::{
    search_terms, PageRequest, WasteItemFilter, WasteItemOrdering, WasteItemQuery,
};
use crate::types::internal::records::{DeletionSummary, Page, WasteItemRecord};
use crate::types::internal::submissions::{
    ValidWasteItem, WasteItemCandidate, WasteItemFields, WasteItemPatch,
};

/// Media paths written for one item, plus the stored paths to fall back on
struct SavedMedia {
    image: Option<String>,
    document: Option<String>,
    written: Vec<String>,
}

/// Waste item workflows, including upload persistence
pub struct WasteItemCoordinator {
    connections: DatabaseConnections,
    record_validator: Arc<RecordValidator>,
    media_storage: Arc<MediaStorage>,
    owner_store: Arc<OwnerStore>,
    waste_item_store: Arc<WasteItemStore>,
    collection_request_store: Arc<CollectionRequestStore>,
}

impl WasteItemCoordinator {
    pub fn new(app_data: Arc<AppData>) -> Self {
        Self {
            connections: app_data.connections.clone(),
            record_validator: Arc::clone(&app_data.record_validator),
            media_storage: Arc::clone(&app_data.media_storage),
            owner_store: Arc::clone(&app_data.owner_store),
            waste_item_store: Arc::clone(&app_data.waste_item_store),
            collection_request_store: Arc::clone(&app_data.collection_request_store),
        }
    }

    /// Validate, check the owner exists, store uploads, insert
    ///
    /// Uploads are written only after validation passes and are removed
    /// again if the insert does not commit.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        candidate: WasteItemCandidate,
    ) -> Result<WasteItemRecord, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, "Creating waste item");

        let item = self.record_validator.validate_waste_item(candidate)?;

        let txn = self.connections.begin_transaction().await?;
        let owner = self.owner_store.get(&txn, item.owner_id).await?;
        let media = self.save_media(&item, None, None).await?;

        let fields = fields_for(&item, &media);
        let outcome = async {
            let created = self.waste_item_store.insert(&txn, fields).await?;
            DatabaseConnections::commit_transaction(txn).await?;
            Ok::<_, InternalError>(created)
        }
        .await;

        let created = self.discard_on_error(outcome, &media).await?;
        tracing::info!(request_id = %ctx.request_id, item_id = created.id, "Waste item created");

        Ok(WasteItemRecord {
            item: created,
            owner_name: owner.name,
        })
    }

    pub async fn get(&self, ctx: &RequestContext, id: i64) -> Result<WasteItemRecord, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, item_id = id, "Fetching waste item");
        self.waste_item_store
            .get_with_owner(&self.connections.records, id)
            .await
    }

    /// Filtered, searched and ordered listing
    ///
    /// An unknown category is a validation failure; an unknown ordering
    /// falls back to newest first.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: WasteItemFilter,
        page: PageRequest,
    ) -> Result<Page<WasteItemRecord>, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, ?filter, "Listing waste items");

        let category = match filter.category.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(value) => Some(
                self.record_validator
                    .parse_category(value)
                    .map_err(|message| ValidationError::single("category", message))?,
            ),
        };

        let query = WasteItemQuery {
            category,
            owner_id: filter.owner_id,
            search_terms: search_terms(filter.search.as_deref()),
            ordering: WasteItemOrdering::parse(filter.ordering.as_deref()),
        };

        self.waste_item_store
            .list(&self.connections.records, &query, page)
            .await
    }

    /// Replace an item; uploads that are not supplied keep the stored file
    pub async fn update(
        &self,
        ctx: &RequestContext,
        id: i64,
        candidate: WasteItemCandidate,
    ) -> Result<WasteItemRecord, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, item_id = id, "Updating waste item");

        let txn = self.connections.begin_transaction().await?;
        let existing = self.waste_item_store.get(&txn, id).await?;

        let item = self.record_validator.validate_waste_item(candidate)?;
        let owner = self.owner_store.get(&txn, item.owner_id).await?;
        let media = self
            .save_media(&item, existing.image.clone(), existing.document.clone())
            .await?;

        let fields = fields_for(&item, &media);
        let outcome = async {
            let updated = self.waste_item_store.update(&txn, existing, fields).await?;
            DatabaseConnections::commit_transaction(txn).await?;
            Ok::<_, InternalError>(updated)
        }
        .await;

        let updated = self.discard_on_error(outcome, &media).await?;
        tracing::info!(request_id = %ctx.request_id, item_id = id, "Waste item updated");

        Ok(WasteItemRecord {
            item: updated,
            owner_name: owner.name,
        })
    }

    pub async fn patch(
        &self,
        ctx: &RequestContext,
        id: i64,
        patch: WasteItemPatch,
    ) -> Result<WasteItemRecord, InternalError> {
        let existing = self.waste_item_store.get(&self.connections.records, id).await?;
        self.update(ctx, id, patch.merge_into(&existing)).await
    }

    /// Delete an item and every request targeting it
    pub async fn delete(&self, ctx: &RequestContext, id: i64) -> Result<DeletionSummary, InternalError> {
        tracing::debug!(request_id = %ctx.request_id, item_id = id, "Deleting waste item");

        let txn = self.connections.begin_transaction().await?;
        self.waste_item_store.get(&txn, id).await?;

        let collection_requests = self
            .collection_request_store
            .delete_for_items(&txn, &[id])
            .await?;
        let waste_items = self.waste_item_store.delete_by_ids(&txn, &[id]).await?;

        DatabaseConnections::commit_transaction(txn).await?;

        let summary = DeletionSummary {
            owners: 0,
            waste_items,
            collection_requests,
        };
        tracing::info!(request_id = %ctx.request_id, item_id = id, ?summary, "Waste item deleted");
        Ok(summary)
    }

    /// Write any new uploads; absent uploads fall back to `stored_*`
    async fn save_media(
        &self,
        item: &ValidWasteItem,
        stored_image: Option<String>,
        stored_document: Option<String>,
    ) -> Result<SavedMedia, InternalError> {
        let mut media = SavedMedia {
            image: stored_image,
            document: stored_document,
            written: Vec::new(),
        };

        if let Some(upload) = &item.image {
            let path = self.media_storage.save(MediaKind::Image, upload).await?;
            media.written.push(path.clone());
            media.image = Some(path);
        }

        if let Some(upload) = &item.document {
            match self.media_storage.save(MediaKind::Document, upload).await {
                Ok(path) => {
                    media.written.push(path.clone());
                    media.document = Some(path);
                }
                Err(e) => {
                    self.media_storage.discard(&media.written).await;
                    return Err(e);
                }
            }
        }

        Ok(media)
    }

    async fn discard_on_error<T>(
        &self,
        outcome: Result<T, InternalError>,
        media: &SavedMedia,
    ) -> Result<T, InternalError> {
        if outcome.is_err() {
            self.media_storage.discard(&media.written).await;
        }
        outcome
    }
}

fn fields_for(item: &ValidWasteItem, media: &SavedMedia) -> WasteItemFields {
    WasteItemFields {
        name: item.name.clone(),
        category: item.category,
        condition: item.condition,
        owner_id: item.owner_id,
        image: media.image.clone(),
        document: media.document.clone(),
    }
}
