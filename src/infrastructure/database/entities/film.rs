// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "filme")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub filmtitel: String,
    pub bild_url: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::besuch::Entity")]
    Besuche,
}

impl Related<super::besuch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Besuche.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
