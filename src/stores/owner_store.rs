use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::errors::internal::EntityKind;
use crate::errors::InternalError;
use crate::types::db::now_millis;
use crate::types::db::owner::{self, ActiveModel, Entity as Owner};
use crate::types::internal::listing::PageRequest;
use crate::types::internal::records::Page;
use crate::types::internal::submissions::ValidOwner;

/// OwnerStore persists owners
///
/// Every method takes the connection (or transaction) to run against so the
/// coordinator decides the transaction boundaries.
pub struct OwnerStore {}

impl OwnerStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Insert a validated owner; both timestamps are set to now
    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        owner: ValidOwner,
    ) -> Result<owner::Model, InternalError> {
        let now = now_millis();
        let new_owner = ActiveModel {
            id: NotSet,
            name: Set(owner.name),
            email: Set(owner.email),
            phone: Set(owner.phone),
            address: Set(owner.address),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_owner
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_owner", e))
    }

    pub async fn find(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<Option<owner::Model>, InternalError> {
        Owner::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_owner", e))
    }

    /// Like `find` but a missing owner is a NotFound error
    pub async fn get(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<owner::Model, InternalError> {
        self.find(conn, id)
            .await?
            .ok_or_else(|| InternalError::not_found(EntityKind::Owner, id))
    }

    /// Whether another owner already uses `email`
    ///
    /// `exclude_id` skips the owner being updated.
    pub async fn email_in_use(
        &self,
        conn: &impl ConnectionTrait,
        email: &str,
        exclude_id: Option<i64>,
    ) -> Result<bool, InternalError> {
        let mut query = Owner::find().filter(owner::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(owner::Column::Id.ne(id));
        }

        let existing = query
            .one(conn)
            .await
            .map_err(|e| InternalError::database("check_owner_email", e))?;

        Ok(existing.is_some())
    }

    /// One page of owners ordered by id
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        page: PageRequest,
    ) -> Result<Page<owner::Model>, InternalError> {
        let paginator = Owner::find()
            .order_by_asc(owner::Column::Id)
            .paginate(conn, page.page_size);

        let count = paginator
            .num_items()
            .await
            .map_err(|e| InternalError::database("count_owners", e))?;
        let results = paginator
            .fetch_page(page.index())
            .await
            .map_err(|e| InternalError::database("list_owners", e))?;

        Ok(Page {
            results,
            count,
            page: page.page,
            page_size: page.page_size,
        })
    }

    /// Overwrite every editable field; `created_at` is kept
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        existing: owner::Model,
        owner: ValidOwner,
    ) -> Result<owner::Model, InternalError> {
        let mut active_model: ActiveModel = existing.into();
        active_model.name = Set(owner.name);
        active_model.email = Set(owner.email);
        active_model.phone = Set(owner.phone);
        active_model.address = Set(owner.address);
        active_model.updated_at = Set(now_millis());

        active_model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_owner", e))
    }

    /// Delete a single owner row, returning the number of rows removed
    ///
    /// Dependent rows must already be gone; see `OwnerCoordinator::delete`.
    pub async fn delete(&self, conn: &impl ConnectionTrait, id: i64) -> Result<u64, InternalError> {
        let result = Owner::delete_by_id(id)
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_owner", e))?;

        Ok(result.rows_affected)
    }

    #[cfg(test)]
    pub async fn count(&self, conn: &impl ConnectionTrait) -> Result<u64, InternalError> {
        Owner::find()
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_owners", e))
    }
}

impl Default for OwnerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for OwnerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OwnerStore").finish()
    }
}
