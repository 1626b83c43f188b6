use sea_orm::entity::prelude::*;

use super::choices::{ItemCategory, ItemCondition};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "waste_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub category: ItemCategory,
    pub condition: ItemCondition,
    pub owner_id: i64,

    // Relative paths under the media root
    pub image: Option<String>,
    pub document: Option<String>,

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
    #[sea_orm(has_many = "super::collection_request::Entity")]
    CollectionRequests,
}

impl Related<super::owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::collection_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectionRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
