//! Create `store` table.
//!
//! Stores are addressed externally by `public_id`; `id` never leaves the backend.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Store::Table)
                    .if_not_exists()
                    .col(uuid(Store::Id).primary_key())
                    .col(string_len(Store::PublicId, 64).unique_key().not_null())
                    .col(string_len(Store::OwnerId, 64).not_null())
                    .col(string_len(Store::Name, 128).not_null())
                    .col(string_len_null(Store::Address, 256))
                    .col(timestamp_with_time_zone(Store::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Store::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Store::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Store { Table, Id, PublicId, OwnerId, Name, Address, CreatedAt, UpdatedAt }
