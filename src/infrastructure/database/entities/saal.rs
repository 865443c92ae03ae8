// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "saele")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub kino_id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::kino::Entity",
        from = "Column::KinoId",
        to = "super::kino::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Kino,
    #[sea_orm(has_many = "super::besuch::Entity")]
    Besuche,
}

impl Related<super::kino::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kino.def()
    }
}

impl Related<super::besuch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Besuche.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
