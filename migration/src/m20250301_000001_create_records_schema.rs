use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create owners table
        manager
            .create_table(
                Table::create()
                    .table(Owners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Owners::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Owners::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Owners::Email).string_len(255).not_null().unique_key())
                    .col(ColumnDef::new(Owners::Phone).string_len(15).not_null())
                    .col(ColumnDef::new(Owners::Address).string_len(255).not_null())
                    .col(ColumnDef::new(Owners::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Owners::UpdatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create waste_items table
        manager
            .create_table(
                Table::create()
                    .table(WasteItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WasteItems::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WasteItems::Name).string_len(255).not_null())
                    .col(ColumnDef::new(WasteItems::Category).string_len(20).not_null())
                    .col(ColumnDef::new(WasteItems::Condition).string_len(20).not_null())
                    .col(ColumnDef::new(WasteItems::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(WasteItems::Image).string())
                    .col(ColumnDef::new(WasteItems::Document).string())
                    .col(ColumnDef::new(WasteItems::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(WasteItems::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_waste_items_owner_id")
                            .from(WasteItems::Table, WasteItems::OwnerId)
                            .to(Owners::Table, Owners::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create collection_requests table
        manager
            .create_table(
                Table::create()
                    .table(CollectionRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollectionRequests::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CollectionRequests::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(CollectionRequests::ItemId).big_integer().not_null())
                    .col(
                        ColumnDef::new(CollectionRequests::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(CollectionRequests::PickupDate).big_integer())
                    .col(ColumnDef::new(CollectionRequests::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(CollectionRequests::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_requests_owner_id")
                            .from(CollectionRequests::Table, CollectionRequests::OwnerId)
                            .to(Owners::Table, Owners::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collection_requests_item_id")
                            .from(CollectionRequests::Table, CollectionRequests::ItemId)
                            .to(WasteItems::Table, WasteItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollectionRequests::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(WasteItems::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Owners::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Owners {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Address,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum WasteItems {
    Table,
    Id,
    Name,
    Category,
    Condition,
    OwnerId,
    Image,
    Document,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
pub(crate) enum CollectionRequests {
    Table,
    Id,
    OwnerId,
    ItemId,
    Status,
    PickupDate,
    CreatedAt,
    UpdatedAt,
}
