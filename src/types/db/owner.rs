use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: String,
    pub address: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::waste_item::Entity")]
    WasteItems,
    #[sea_orm(has_many = "super::collection_request::Entity")]
    CollectionRequests,
}

impl Related<super::waste_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WasteItems.def()
    }
}

impl Related<super::collection_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CollectionRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
