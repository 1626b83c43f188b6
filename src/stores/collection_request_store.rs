use std::collections::{BTreeSet, HashMap};

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::EntityKind;
use crate::errors::InternalError;
use crate::types::db::collection_request::{self, ActiveModel, Entity as CollectionRequest};
use crate::types::db::{now_millis, owner, waste_item, RequestStatus};
use crate::types::internal::listing::PageRequest;
use crate::types::internal::records::{CollectionRequestRecord, Page};
use crate::types::internal::submissions::CollectionRequestFields;

/// CollectionRequestStore persists pickup requests
pub struct CollectionRequestStore {}

impl CollectionRequestStore {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        fields: CollectionRequestFields,
    ) -> Result<collection_request::Model, InternalError> {
        let now = now_millis();
        let new_request = ActiveModel {
            id: NotSet,
            owner_id: Set(fields.owner_id),
            item_id: Set(fields.item_id),
            status: Set(fields.status),
            pickup_date: Set(fields.pickup_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_request
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_collection_request", e))
    }

    pub async fn find(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<Option<collection_request::Model>, InternalError> {
        CollectionRequest::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_collection_request", e))
    }

    pub async fn get(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<collection_request::Model, InternalError> {
        self.find(conn, id)
            .await?
            .ok_or_else(|| InternalError::not_found(EntityKind::CollectionRequest, id))
    }

    /// Attach owner and item names to each request
    ///
    /// Names are loaded with one query per referenced table.
    pub async fn describe(
        &self,
        conn: &impl ConnectionTrait,
        requests: Vec<collection_request::Model>,
    ) -> Result<Vec<CollectionRequestRecord>, InternalError> {
        let owner_ids: BTreeSet<i64> = requests.iter().map(|r| r.owner_id).collect();
        let item_ids: BTreeSet<i64> = requests.iter().map(|r| r.item_id).collect();

        let owner_names: HashMap<i64, String> = owner::Entity::find()
            .filter(owner::Column::Id.is_in(owner_ids))
            .all(conn)
            .await
            .map_err(|e| InternalError::database("load_request_owners", e))?
            .into_iter()
            .map(|o| (o.id, o.name))
            .collect();

        let item_names: HashMap<i64, String> = waste_item::Entity::find()
            .filter(waste_item::Column::Id.is_in(item_ids))
            .all(conn)
            .await
            .map_err(|e| InternalError::database("load_request_items", e))?
            .into_iter()
            .map(|i| (i.id, i.name))
            .collect();

        Ok(requests
            .into_iter()
            .map(|request| CollectionRequestRecord {
                owner_name: owner_names.get(&request.owner_id).cloned().unwrap_or_default(),
                item_name: item_names.get(&request.item_id).cloned().unwrap_or_default(),
                request,
            })
            .collect())
    }

    /// One page of requests ordered by id
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        page: PageRequest,
    ) -> Result<Page<CollectionRequestRecord>, InternalError> {
        let paginator = CollectionRequest::find()
            .order_by_asc(collection_request::Column::Id)
            .paginate(conn, page.page_size);

        let count = paginator
            .num_items()
            .await
            .map_err(|e| InternalError::database("count_collection_requests", e))?;
        let requests = paginator
            .fetch_page(page.index())
            .await
            .map_err(|e| InternalError::database("list_collection_requests", e))?;

        Ok(Page {
            results: self.describe(conn, requests).await?,
            count,
            page: page.page,
            page_size: page.page_size,
        })
    }

    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        existing: collection_request::Model,
        fields: CollectionRequestFields,
    ) -> Result<collection_request::Model, InternalError> {
        let mut active_model: ActiveModel = existing.into();
        active_model.owner_id = Set(fields.owner_id);
        active_model.item_id = Set(fields.item_id);
        active_model.status = Set(fields.status);
        active_model.pickup_date = Set(fields.pickup_date);
        active_model.updated_at = Set(now_millis());

        active_model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_collection_request", e))
    }

    /// Change only the status column
    pub async fn set_status(
        &self,
        conn: &impl ConnectionTrait,
        existing: collection_request::Model,
        status: RequestStatus,
    ) -> Result<collection_request::Model, InternalError> {
        let mut active_model: ActiveModel = existing.into();
        active_model.status = Set(status);
        active_model.updated_at = Set(now_millis());

        active_model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_collection_request_status", e))
    }

    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i64) -> Result<u64, InternalError> {
        let result = CollectionRequest::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_collection_request", e))?;

        Ok(result.rows_affected)
    }

    /// Remove requests targeting any of `item_ids`
    pub async fn delete_for_items(
        &self,
        conn: &impl ConnectionTrait,
        item_ids: &[i64],
    ) -> Result<u64, InternalError> {
        if item_ids.is_empty() {
            return Ok(0);
        }

        let result = CollectionRequest::delete_many()
            .filter(collection_request::Column::ItemId.is_in(item_ids.iter().copied()))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_requests_for_items", e))?;

        Ok(result.rows_affected)
    }

    /// Remove requests filed by `owner_id`
    pub async fn delete_for_owner(
        &self,
        conn: &impl ConnectionTrait,
        owner_id: i64,
    ) -> Result<u64, InternalError> {
        let result = CollectionRequest::delete_many()
            .filter(collection_request::Column::OwnerId.eq(owner_id))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_requests_for_owner", e))?;

        Ok(result.rows_affected)
    }

    #[cfg(test)]
    pub async fn count(&self, conn: &impl ConnectionTrait) -> Result<u64, InternalError> {
        CollectionRequest::find()
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_collection_requests", e))
    }
}

impl Default for CollectionRequestStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for CollectionRequestStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionRequestStore").finish()
    }
}
