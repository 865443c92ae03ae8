// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::film_request::{CreateFilmDto, UpdateFilmDto};
use crate::application::dto::list_query::ListQuery;
use crate::application::use_cases::error::{require, ServiceError, FOREIGN_KEY_CONSTRAINT_VIOLATION};
use crate::application::use_cases::listing::list_records;
use crate::domain::models::film::{Film, NewFilm};
use crate::domain::repositories::film_repository::FilmRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::{info, warn};

const RESOURCE: &str = "Film";

/// 电影用例
pub struct FilmUseCase<R: FilmRepository> {
    repo: Arc<R>,
}

impl<R: FilmRepository> FilmUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 列出电影，提供搜索词时按片名模糊搜索
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Film>, ServiceError> {
        let filme = self.repo.find_all().await?;
        Ok(list_records("filme", query, filme))
    }

    pub async fn get(&self, id: i32) -> Result<Film, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn create(&self, dto: CreateFilmDto) -> Result<Film, ServiceError> {
        let new = NewFilm {
            filmtitel: require("filmtitel", dto.filmtitel)?,
            bild_url: require("bild_url", dto.bild_url)?,
        };

        let film = self.repo.create(&new).await?;
        info!("Created film {} '{}'", film.id, film.filmtitel);
        Ok(film)
    }

    pub async fn update(&self, id: i32, dto: UpdateFilmDto) -> Result<Film, ServiceError> {
        let mut film = self.get(id).await?;

        if let Some(filmtitel) = dto.filmtitel {
            film.filmtitel = filmtitel;
        }
        if let Some(bild_url) = dto.bild_url {
            film.bild_url = bild_url;
        }

        Ok(self.repo.update(&film).await?)
    }

    /// 删除电影，仍被观影记录引用时返回冲突
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                info!("Deleted film {}", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(RESOURCE)),
            Err(RepositoryError::ForeignKeyViolation(detail)) => {
                warn!("Film {} is still referenced: {}", id, detail);
                Err(ServiceError::conflict(
                    FOREIGN_KEY_CONSTRAINT_VIOLATION,
                    "Film kann nicht gelöscht werden, da er von einem oder mehreren Besuchen verwendet wird.",
                ))
            }
            Err(e) => Err(e.into()),
        }
    }
}
