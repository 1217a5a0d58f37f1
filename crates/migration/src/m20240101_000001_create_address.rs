//! Create `address` table.
//!
//! Named locations with their coordinates in degrees.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(string_len(Address::Name, 256).not_null())
                    .col(string_len(Address::City, 256).not_null())
                    .col(string_len(Address::State, 256).not_null())
                    .col(double(Address::Latitude).not_null())
                    .col(double(Address::Longitude).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Address::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Address { Table, Id, Name, City, State, Latitude, Longitude }
