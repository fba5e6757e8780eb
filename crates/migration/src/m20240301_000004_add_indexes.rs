use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Store: listed per owner
        manager
            .create_index(
                Index::create()
                    .name("idx_store_owner")
                    .table(Store::Table)
                    .col(Store::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Item: listed per seller
        manager
            .create_index(
                Index::create()
                    .name("idx_item_seller")
                    .table(Item::Table)
                    .col(Item::SellerId)
                    .to_owned(),
            )
            .await?;

        // StockItem: paged per store in insertion order
        manager
            .create_index(
                Index::create()
                    .name("idx_stock_item_store_created")
                    .table(StockItem::Table)
                    .col(StockItem::StoreId)
                    .col(StockItem::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_stock_item_store_created").table(StockItem::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_item_seller").table(Item::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_store_owner").table(Store::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Store { Table, OwnerId }

#[derive(DeriveIden)]
enum Item { Table, SellerId }

#[derive(DeriveIden)]
enum StockItem { Table, StoreId, CreatedAt }
