// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Kinos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Kinos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Kinos::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Kinos::Ort).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Kinos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Kinos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Kinos::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Kinos {
    Table,
    Id,
    Name,
    Ort,
    CreatedAt,
    UpdatedAt,
}
