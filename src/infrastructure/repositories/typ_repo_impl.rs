// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::typ::{round_chf, NewTyp, Typ};
use crate::domain::repositories::typ_repository::TypRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::typ;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 票种仓库实现
#[derive(Clone)]
pub struct TypRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl TypRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TypRepository for TypRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Typ>, RepositoryError> {
        let models = typ::Entity::find()
            .order_by_asc(typ::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Typ>, RepositoryError> {
        let model = typ::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, new: &NewTyp) -> Result<Typ, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = typ::ActiveModel {
            name: Set(new.name.clone()),
            zuschlag_chf: Set(round_chf(new.zuschlag_chf)),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn update(&self, record: &Typ) -> Result<Typ, RepositoryError> {
        let model = typ::ActiveModel {
            id: Unchanged(record.id),
            name: Set(record.name.clone()),
            zuschlag_chf: Set(round_chf(record.zuschlag_chf)),
            created_at: Unchanged(record.created_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = typ::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<typ::Model> for Typ {
    fn from(model: typ::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            zuschlag_chf: model.zuschlag_chf,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
