use sea_orm::sea_query::LikeExpr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait, NotSet, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

use crate::errors::internal::EntityKind;
use crate::errors::InternalError;
use crate::types::db::now_millis;
use crate::types::db::owner;
use crate::types::db::waste_item::{self, ActiveModel, Entity as WasteItem};
use crate::types::internal::listing::{PageRequest, WasteItemQuery, WasteItemSortField};
use crate::types::internal::records::{Page, WasteItemRecord};
use crate::types::internal::submissions::WasteItemFields;

/// WasteItemStore persists waste items and answers filtered listings
pub struct WasteItemStore {}

impl WasteItemStore {
    pub fn new() -> Self {
        Self {}
    }

    pub async fn insert(
        &self,
        conn: &impl ConnectionTrait,
        fields: WasteItemFields,
    ) -> Result<waste_item::Model, InternalError> {
        let now = now_millis();
        let new_item = ActiveModel {
            id: NotSet,
            name: Set(fields.name),
            category: Set(fields.category),
            condition: Set(fields.condition),
            owner_id: Set(fields.owner_id),
            image: Set(fields.image),
            document: Set(fields.document),
            created_at: Set(now),
            updated_at: Set(now),
        };

        new_item
            .insert(conn)
            .await
            .map_err(|e| InternalError::database("insert_waste_item", e))
    }

    pub async fn find(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<Option<waste_item::Model>, InternalError> {
        WasteItem::find_by_id(id)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_waste_item", e))
    }

    pub async fn get(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<waste_item::Model, InternalError> {
        self.find(conn, id)
            .await?
            .ok_or_else(|| InternalError::not_found(EntityKind::WasteItem, id))
    }

    /// Item together with its owner's name
    pub async fn get_with_owner(
        &self,
        conn: &impl ConnectionTrait,
        id: i64,
    ) -> Result<WasteItemRecord, InternalError> {
        let row = WasteItem::find_by_id(id)
            .find_also_related(owner::Entity)
            .one(conn)
            .await
            .map_err(|e| InternalError::database("find_waste_item_with_owner", e))?
            .ok_or_else(|| InternalError::not_found(EntityKind::WasteItem, id))?;

        Ok(into_record(row))
    }

    /// One page of items matching `query`
    ///
    /// Filters are exact matches; every search term must match the name,
    /// category or condition as a substring.
    pub async fn list(
        &self,
        conn: &impl ConnectionTrait,
        query: &WasteItemQuery,
        page: PageRequest,
    ) -> Result<Page<WasteItemRecord>, InternalError> {
        let paginator = ordered(filtered(query), query)
            .find_also_related(owner::Entity)
            .paginate(conn, page.page_size);

        let count = paginator
            .num_items()
            .await
            .map_err(|e| InternalError::database("count_waste_items", e))?;
        let rows = paginator
            .fetch_page(page.index())
            .await
            .map_err(|e| InternalError::database("list_waste_items", e))?;

        Ok(Page {
            results: rows.into_iter().map(into_record).collect(),
            count,
            page: page.page,
            page_size: page.page_size,
        })
    }

    /// Overwrite every column from `fields` and refresh `updated_at`
    pub async fn update(
        &self,
        conn: &impl ConnectionTrait,
        existing: waste_item::Model,
        fields: WasteItemFields,
    ) -> Result<waste_item::Model, InternalError> {
        let mut active_model: ActiveModel = existing.into();
        active_model.name = Set(fields.name);
        active_model.category = Set(fields.category);
        active_model.condition = Set(fields.condition);
        active_model.owner_id = Set(fields.owner_id);
        active_model.image = Set(fields.image);
        active_model.document = Set(fields.document);
        active_model.updated_at = Set(now_millis());

        active_model
            .update(conn)
            .await
            .map_err(|e| InternalError::database("update_waste_item", e))
    }

    /// Ids of every item belonging to `owner_id`
    pub async fn ids_owned_by(
        &self,
        conn: &impl ConnectionTrait,
        owner_id: i64,
    ) -> Result<Vec<i64>, InternalError> {
        WasteItem::find()
            .select_only()
            .column(waste_item::Column::Id)
            .filter(waste_item::Column::OwnerId.eq(owner_id))
            .order_by_asc(waste_item::Column::Id)
            .into_tuple::<i64>()
            .all(conn)
            .await
            .map_err(|e| InternalError::database("find_owned_waste_items", e))
    }

    pub async fn delete_by_ids(
        &self,
        conn: &impl ConnectionTrait,
        ids: &[i64],
    ) -> Result<u64, InternalError> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = WasteItem::delete_many()
            .filter(waste_item::Column::Id.is_in(ids.iter().copied()))
            .exec(conn)
            .await
            .map_err(|e| InternalError::database("delete_waste_items", e))?;

        Ok(result.rows_affected)
    }

    #[cfg(test)]
    pub async fn count(&self, conn: &impl ConnectionTrait) -> Result<u64, InternalError> {
        WasteItem::find()
            .count(conn)
            .await
            .map_err(|e| InternalError::database("count_waste_items", e))
    }
}

fn filtered(query: &WasteItemQuery) -> Select<WasteItem> {
    let mut select = WasteItem::find();

    if let Some(category) = query.category {
        select = select.filter(waste_item::Column::Category.eq(category));
    }
    if let Some(owner_id) = query.owner_id {
        select = select.filter(waste_item::Column::OwnerId.eq(owner_id));
    }

    for term in &query.search_terms {
        let pattern = contains_literal(term);
        select = select.filter(
            Condition::any()
                .add(waste_item::Column::Name.like(pattern.clone()))
                .add(waste_item::Column::Category.like(pattern.clone()))
                .add(waste_item::Column::Condition.like(pattern)),
        );
    }

    select
}

/// `%term%` with `%`, `_` and `\` in the term matched literally
fn contains_literal(term: &str) -> LikeExpr {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');

    LikeExpr::new(pattern).escape('\\')
}

fn ordered(select: Select<WasteItem>, query: &WasteItemQuery) -> Select<WasteItem> {
    let direction = if query.ordering.descending { Order::Desc } else { Order::Asc };
    let column = match query.ordering.field {
        WasteItemSortField::CreatedAt => waste_item::Column::CreatedAt,
        WasteItemSortField::UpdatedAt => waste_item::Column::UpdatedAt,
        WasteItemSortField::Name => waste_item::Column::Name,
    };

    // id breaks ties so pages are stable
    select
        .order_by(column, direction.clone())
        .order_by(waste_item::Column::Id, direction)
}

fn into_record((item, owner): (waste_item::Model, Option<owner::Model>)) -> WasteItemRecord {
    WasteItemRecord {
        item,
        owner_name: owner.map(|o| o.name).unwrap_or_default(),
    }
}

impl Default for WasteItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for WasteItemStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WasteItemStore").finish()
    }
}
