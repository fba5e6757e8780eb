//! Create `item` table.
//!
//! Items belong to a seller and are addressed externally by `public_id`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Item::Table)
                    .if_not_exists()
                    .col(uuid(Item::Id).primary_key())
                    .col(string_len(Item::PublicId, 64).unique_key().not_null())
                    .col(string_len(Item::SellerId, 64).not_null())
                    .col(string_len(Item::Name, 128).not_null())
                    .col(text_null(Item::Description))
                    .col(timestamp_with_time_zone(Item::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Item::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Item::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Item { Table, Id, PublicId, SellerId, Name, Description, CreatedAt, UpdatedAt }
