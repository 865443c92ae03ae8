// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::einstellung::{Einstellung, NewEinstellung};
use crate::domain::repositories::einstellung_repository::EinstellungRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::einstellung;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 设置仓库实现
#[derive(Clone)]
pub struct EinstellungRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl EinstellungRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EinstellungRepository for EinstellungRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Einstellung>, RepositoryError> {
        let models = einstellung::Entity::find()
            .order_by_asc(einstellung::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_key(&self, key: &str) -> Result<Option<Einstellung>, RepositoryError> {
        let model = einstellung::Entity::find()
            .filter(einstellung::Column::Key.eq(key))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, new: &NewEinstellung) -> Result<Einstellung, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = einstellung::ActiveModel {
            key: Set(new.key.clone()),
            value: Set(new.value.clone()),
            description: Set(new.description.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn update(&self, record: &Einstellung) -> Result<Einstellung, RepositoryError> {
        let model = einstellung::ActiveModel {
            id: Unchanged(record.id),
            key: Set(record.key.clone()),
            value: Set(record.value.clone()),
            description: Set(record.description.clone()),
            created_at: Unchanged(record.created_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete_by_key(&self, key: &str) -> Result<(), RepositoryError> {
        let result = einstellung::Entity::delete_many()
            .filter(einstellung::Column::Key.eq(key))
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<einstellung::Model> for Einstellung {
    fn from(model: einstellung::Model) -> Self {
        Self {
            id: model.id,
            key: model.key,
            value: model.value,
            description: model.description,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
