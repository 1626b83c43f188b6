use sea_orm::sea_query::Expr;
use sea_orm::{
    ConnectionTrait, EntityTrait, JoinType, PaginatorTrait, QueryOrder, QuerySelect, RelationTrait,
};

use crate::errors::InternalError;
use crate::types::db::{collection_request, owner, waste_item};
use crate::types::internal::analytics::{
    AnalyticsSnapshot, CategoryCount, OwnerContribution, StatusCount,
};

/// Read-only grouped counts over the record tables
pub struct AnalyticsStore {}

impl AnalyticsStore {
    pub fn new() -> Self {
        Self {}
    }

    /// Compute every dashboard figure against `conn`
    ///
    /// Run inside one read transaction for a consistent view. Groups with no
    /// rows are absent from the category and status breakdowns; owners with
    /// no items report zero.
    pub async fn snapshot(&self, conn: &impl ConnectionTrait) -> Result<AnalyticsSnapshot, InternalError> {
        let total_users = owner::Entity::find()
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_owners", e))?;

        let total_e_waste_items = waste_item::Entity::find()
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_waste_items", e))?;

        let e_waste_by_category = waste_item::Entity::find()
            .select_only()
            .column(waste_item::Column::Category)
            .column_as(Expr::col(waste_item::Column::Id).count(), "count")
            .group_by(waste_item::Column::Category)
            .order_by_asc(waste_item::Column::Category)
            .into_model::<CategoryCount>()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("count_items_by_category", e))?;

        let collection_status_counts = collection_request::Entity::find()
            .select_only()
            .column(collection_request::Column::Status)
            .column_as(Expr::col(collection_request::Column::Id).count(), "count")
            .group_by(collection_request::Column::Status)
            .order_by_asc(collection_request::Column::Status)
            .into_model::<StatusCount>()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("count_requests_by_status", e))?;

        let user_contributions = owner::Entity::find()
            .select_only()
            .column(owner::Column::Name)
            .column_as(
                Expr::col((waste_item::Entity, waste_item::Column::Id)).count(),
                "total_items",
            )
            .join(JoinType::LeftJoin, owner::Relation::WasteItems.def())
            .group_by(owner::Column::Id)
            .group_by(owner::Column::Name)
            .order_by_asc(owner::Column::Id)
            .into_model::<OwnerContribution>()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("count_items_by_owner", e))?;

        Ok(AnalyticsSnapshot {
            total_users,
            total_e_waste_items,
            e_waste_by_category,
            collection_status_counts,
            user_contributions,
        })
    }
}

impl Default for AnalyticsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AnalyticsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsStore").finish()
    }
}
