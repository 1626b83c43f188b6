use sea_orm_migration::prelude::*;

use crate::m20250301_000001_create_records_schema::{CollectionRequests, WasteItems};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Listing filters and cascade lookups
        manager
            .create_index(
                Index::create()
                    .name("idx_waste_items_owner_id")
                    .table(WasteItems::Table)
                    .col(WasteItems::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_waste_items_category")
                    .table(WasteItems::Table)
                    .col(WasteItems::Category)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collection_requests_item_id")
                    .table(CollectionRequests::Table)
                    .col(CollectionRequests::ItemId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_collection_requests_owner_id")
                    .table(CollectionRequests::Table)
                    .col(CollectionRequests::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_collection_requests_owner_id")
                    .table(CollectionRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_collection_requests_item_id")
                    .table(CollectionRequests::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_waste_items_category")
                    .table(WasteItems::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_waste_items_owner_id")
                    .table(WasteItems::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
