// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "besuche")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub anfang: DateTime,
    pub ende: DateTime,
    pub reihe: String,
    pub platz: i16,
    pub untertitel: bool,
    #[sea_orm(column_type = "Double", nullable)]
    pub snackzuschlag_chf: Option<f64>,
    pub film_id: i32,
    pub typ_id: i32,
    pub sprache_id: i32,
    pub saal_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::film::Entity",
        from = "Column::FilmId",
        to = "super::film::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Film,
    #[sea_orm(
        belongs_to = "super::typ::Entity",
        from = "Column::TypId",
        to = "super::typ::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Typ,
    #[sea_orm(
        belongs_to = "super::sprache::Entity",
        from = "Column::SpracheId",
        to = "super::sprache::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Sprache,
    #[sea_orm(
        belongs_to = "super::saal::Entity",
        from = "Column::SaalId",
        to = "super::saal::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Saal,
}

impl Related<super::film::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Film.def()
    }
}

impl Related<super::typ::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Typ.def()
    }
}

impl Related<super::sprache::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sprache.def()
    }
}

impl Related<super::saal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Saal.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
