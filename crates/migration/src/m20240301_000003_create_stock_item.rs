//! Create `stock_item` table.
//! One row per (store, item) pair holding quantity and pricing.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StockItem::Table)
                    .if_not_exists()
                    .col(uuid(StockItem::Id).primary_key())
                    .col(uuid(StockItem::StoreId).not_null())
                    .col(uuid(StockItem::ItemId).not_null())
                    .col(integer(StockItem::Quantity).not_null())
                    .col(double(StockItem::Price).not_null())
                    .col(double(StockItem::Cost).not_null())
                    .col(timestamp_with_time_zone(StockItem::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(StockItem::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_item_store")
                            .from(StockItem::Table, StockItem::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_stock_item_item")
                            .from(StockItem::Table, StockItem::ItemId)
                            .to(Item::Table, Item::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // An item is stocked at most once per store
        manager
            .create_index(
                Index::create()
                    .name("idx_stock_item_store_item_unique")
                    .table(StockItem::Table)
                    .col(StockItem::StoreId)
                    .col(StockItem::ItemId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(StockItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum StockItem {
    Table,
    Id,
    StoreId,
    ItemId,
    Quantity,
    Price,
    Cost,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Store { Table, Id }

#[derive(DeriveIden)]
enum Item { Table, Id }
