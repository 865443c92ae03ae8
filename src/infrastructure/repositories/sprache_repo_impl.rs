// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::sprache::{NewSprache, Sprache};
use crate::domain::repositories::sprache_repository::SpracheRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::sprache;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 语言仓库实现
#[derive(Clone)]
pub struct SpracheRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SpracheRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SpracheRepository for SpracheRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Sprache>, RepositoryError> {
        let models = sprache::Entity::find()
            .order_by_asc(sprache::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Sprache>, RepositoryError> {
        let model = sprache::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, new: &NewSprache) -> Result<Sprache, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = sprache::ActiveModel {
            name: Set(new.name.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn update(&self, record: &Sprache) -> Result<Sprache, RepositoryError> {
        let model = sprache::ActiveModel {
            id: Unchanged(record.id),
            name: Set(record.name.clone()),
            created_at: Unchanged(record.created_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = sprache::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<sprache::Model> for Sprache {
    fn from(model: sprache::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
