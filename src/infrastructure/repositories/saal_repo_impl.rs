// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::saal::{NewSaal, Saal};
use crate::domain::repositories::saal_repository::SaalRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::saal;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 影厅仓库实现
#[derive(Clone)]
pub struct SaalRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl SaalRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SaalRepository for SaalRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Saal>, RepositoryError> {
        let models = saal::Entity::find()
            .order_by_asc(saal::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Saal>, RepositoryError> {
        let model = saal::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, new: &NewSaal) -> Result<Saal, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = saal::ActiveModel {
            name: Set(new.name.clone()),
            kino_id: Set(new.kino_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn update(&self, record: &Saal) -> Result<Saal, RepositoryError> {
        let model = saal::ActiveModel {
            id: Unchanged(record.id),
            name: Set(record.name.clone()),
            kino_id: Set(record.kino_id),
            created_at: Unchanged(record.created_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = saal::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists_by_name_in_kino(
        &self,
        name: &str,
        kino_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError> {
        let mut query = saal::Entity::find()
            .filter(saal::Column::Name.eq(name))
            .filter(saal::Column::KinoId.eq(kino_id));

        if let Some(id) = exclude_id {
            query = query.filter(saal::Column::Id.ne(id));
        }

        Ok(query.count(self.db.as_ref()).await? > 0)
    }
}

impl From<saal::Model> for Saal {
    fn from(model: saal::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            kino_id: model.kino_id,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
