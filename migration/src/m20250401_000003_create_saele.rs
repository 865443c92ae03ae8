// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use super::m20250401_000002_create_kinos::Kinos;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 外键内联声明，SQLite 不支持 ALTER TABLE ADD CONSTRAINT
        manager
            .create_table(
                Table::create()
                    .table(Saele::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Saele::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Saele::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Saele::KinoId).integer().not_null())
                    .col(
                        ColumnDef::new(Saele::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Saele::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_saele_kino_id")
                            .from(Saele::Table, Saele::KinoId)
                            .to(Kinos::Table, Kinos::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_saele_kino_id")
                    .table(Saele::Table)
                    .col(Saele::KinoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Saele::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Saele {
    Table,
    Id,
    Name,
    KinoId,
    CreatedAt,
    UpdatedAt,
}
