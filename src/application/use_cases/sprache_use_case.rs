// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::sprache_request::{CreateSpracheDto, UpdateSpracheDto};
use crate::application::dto::list_query::ListQuery;
use crate::application::use_cases::error::{require, ServiceError, FOREIGN_KEY_CONSTRAINT_VIOLATION};
use crate::application::use_cases::listing::list_records;
use crate::domain::models::sprache::{NewSprache, Sprache};
use crate::domain::repositories::sprache_repository::SpracheRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::{info, warn};

const RESOURCE: &str = "Sprache";

/// 语言用例
pub struct SpracheUseCase<R: SpracheRepository> {
    repo: Arc<R>,
}

impl<R: SpracheRepository> SpracheUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Sprache>, ServiceError> {
        let sprachen = self.repo.find_all().await?;
        Ok(list_records("sprachen", query, sprachen))
    }

    pub async fn get(&self, id: i32) -> Result<Sprache, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn create(&self, dto: CreateSpracheDto) -> Result<Sprache, ServiceError> {
        let new = NewSprache {
            name: require("name", dto.name)?,
        };

        let sprache = self.repo.create(&new).await?;
        info!("Created sprache {} '{}'", sprache.id, sprache.name);
        Ok(sprache)
    }

    pub async fn update(&self, id: i32, dto: UpdateSpracheDto) -> Result<Sprache, ServiceError> {
        let mut sprache = self.get(id).await?;

        if let Some(name) = dto.name {
            sprache.name = name;
        }

        Ok(self.repo.update(&sprache).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                info!("Deleted sprache {}", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(RESOURCE)),
            Err(RepositoryError::ForeignKeyViolation(detail)) => {
                warn!("Sprache {} is still referenced: {}", id, detail);
                Err(ServiceError::conflict(
                    FOREIGN_KEY_CONSTRAINT_VIOLATION,
                    "Sprache kann nicht gelöscht werden, da sie von einem oder mehreren Besuchen verwendet wird.",
                ))
            }
            Err(e) => Err(e.into()),
        }
    }
}
