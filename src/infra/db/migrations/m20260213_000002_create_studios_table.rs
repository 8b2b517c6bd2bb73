//! Migration: Create the studios table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Studios::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Studios::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Studios::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Studios::Description)
                            .string_len(2000)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Studios::HourlyRate)
                            .decimal_len(18, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Studios::MaxCapacity).integer().not_null())
                    .col(ColumnDef::new(Studios::Location).string_len(300).null())
                    .col(
                        ColumnDef::new(Studios::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Studios::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Studios {
    Table,
    Id,
    Name,
    Description,
    HourlyRate,
    MaxCapacity,
    Location,
    CreatedAt,
}
