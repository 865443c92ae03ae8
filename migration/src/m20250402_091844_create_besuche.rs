// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

use super::m20250401_000001_create_filme::Filme;
use super::m20250401_000003_create_saele::Saele;
use super::m20250401_000004_create_sprachen::Sprachen;
use super::m20250401_000005_create_typen::Typen;

/// 创建 besuche 表，四个外键均为 ON DELETE RESTRICT
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Besuche::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Besuche::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Besuche::Anfang).date_time().not_null())
                    .col(ColumnDef::new(Besuche::Ende).date_time().not_null())
                    .col(ColumnDef::new(Besuche::Reihe).char_len(1).not_null())
                    .col(ColumnDef::new(Besuche::Platz).small_integer().not_null())
                    .col(ColumnDef::new(Besuche::Untertitel).boolean().not_null())
                    .col(ColumnDef::new(Besuche::SnackzuschlagChf).double().null())
                    .col(ColumnDef::new(Besuche::FilmId).integer().not_null())
                    .col(ColumnDef::new(Besuche::TypId).integer().not_null())
                    .col(ColumnDef::new(Besuche::SpracheId).integer().not_null())
                    .col(ColumnDef::new(Besuche::SaalId).integer().not_null())
                    .col(
                        ColumnDef::new(Besuche::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Besuche::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_besuche_film_id")
                            .from(Besuche::Table, Besuche::FilmId)
                            .to(Filme::Table, Filme::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_besuche_typ_id")
                            .from(Besuche::Table, Besuche::TypId)
                            .to(Typen::Table, Typen::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_besuche_sprache_id")
                            .from(Besuche::Table, Besuche::SpracheId)
                            .to(Sprachen::Table, Sprachen::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_besuche_saal_id")
                            .from(Besuche::Table, Besuche::SaalId)
                            .to(Saele::Table, Saele::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_besuche_saal_id")
                    .table(Besuche::Table)
                    .col(Besuche::SaalId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Besuche::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Besuche {
    Table,
    Id,
    Anfang,
    Ende,
    Reihe,
    Platz,
    Untertitel,
    SnackzuschlagChf,
    FilmId,
    TypId,
    SpracheId,
    SaalId,
    CreatedAt,
    UpdatedAt,
}
