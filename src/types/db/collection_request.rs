use sea_orm::entity::prelude::*;

use super::choices::RequestStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "collection_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub owner_id: i64,
    pub item_id: i64,
    pub status: RequestStatus,
    pub pickup_date: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::owner::Entity",
        from = "Column::OwnerId",
        to = "super::owner::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(
        belongs_to = "super::waste_item::Entity",
        from = "Column::ItemId",
        to = "super::waste_item::Column::Id",
        on_delete = "Cascade"
    )]
    WasteItem,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::waste_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WasteItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
