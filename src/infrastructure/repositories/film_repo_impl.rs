// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::film::{Film, NewFilm};
use crate::domain::repositories::film_repository::FilmRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::film;
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 电影仓库实现
#[derive(Clone)]
pub struct FilmRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl FilmRepositoryImpl {
    /// 创建新的电影仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl FilmRepository for FilmRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Film>, RepositoryError> {
        let models = film::Entity::find()
            .order_by_asc(film::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Film>, RepositoryError> {
        let model = film::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, new: &NewFilm) -> Result<Film, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = film::ActiveModel {
            filmtitel: Set(new.filmtitel.clone()),
            bild_url: Set(new.bild_url.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let saved = model.insert(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn update(&self, record: &Film) -> Result<Film, RepositoryError> {
        let model = film::ActiveModel {
            id: Unchanged(record.id),
            filmtitel: Set(record.filmtitel.clone()),
            bild_url: Set(record.bild_url.clone()),
            created_at: Unchanged(record.created_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        let saved = model.update(self.db.as_ref()).await?;
        Ok(saved.into())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let result = film::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<film::Model> for Film {
    fn from(model: film::Model) -> Self {
        Self {
            id: model.id,
            filmtitel: model.filmtitel,
            bild_url: model.bild_url,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
