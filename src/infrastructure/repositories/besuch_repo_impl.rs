// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::besuch::{Besuch, NewBesuch};
use crate::domain::models::typ::round_chf;
use crate::domain::repositories::besuch_repository::BesuchRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::besuch;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 观影记录仓库实现
#[derive(Clone)]
pub struct BesuchRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl BesuchRepositoryImpl {
    /// 创建新的观影记录仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BesuchRepository for BesuchRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Besuch>, RepositoryError> {
        let models = besuch::Entity::find()
            .order_by_asc(besuch::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Besuch>, RepositoryError> {
        let model = besuch::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, new: &NewBesuch) -> Result<Besuch, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = besuch::ActiveModel {
            anfang: Set(new.anfang),
            ende: Set(new.ende),
            reihe: Set(new.reihe.clone()),
            platz: Set(new.platz),
            untertitel: Set(new.untertitel),
            snackzuschlag_chf: Set(new.snackzuschlag_chf.map(round_chf)),
            film_id: Set(new.film_id),
            typ_id: Set(new.typ_id),
            sprache_id: Set(new.sprache_id),
            saal_id: Set(new.saal_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn update(&self, record: &Besuch) -> Result<Besuch, RepositoryError> {
        let model = besuch::ActiveModel {
            id: Unchanged(record.id),
            anfang: Set(record.anfang),
            ende: Set(record.ende),
            reihe: Set(record.reihe.clone()),
            platz: Set(record.platz),
            untertitel: Set(record.untertitel),
            snackzuschlag_chf: Set(record.snackzuschlag_chf.map(round_chf)),
            film_id: Set(record.film_id),
            typ_id: Set(record.typ_id),
            sprache_id: Set(record.sprache_id),
            saal_id: Set(record.saal_id),
            created_at: Unchanged(record.created_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = besuch::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<besuch::Model> for Besuch {
    fn from(model: besuch::Model) -> Self {
        Self {
            id: model.id,
            anfang: model.anfang,
            ende: model.ende,
            reihe: model.reihe,
            platz: model.platz,
            untertitel: model.untertitel,
            snackzuschlag_chf: model.snackzuschlag_chf,
            film_id: model.film_id,
            typ_id: model.typ_id,
            sprache_id: model.sprache_id,
            saal_id: model.saal_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
