// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::einstellung_request::{CreateEinstellungDto, UpdateEinstellungDto};
use crate::application::use_cases::error::{require, ServiceError, UNIQUE_CONSTRAINT_VIOLATION};
use crate::domain::models::einstellung::{Einstellung, NewEinstellung};
use crate::domain::repositories::einstellung_repository::EinstellungRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::{info, warn};

const RESOURCE: &str = "Einstellung";
const DUPLICATE_MESSAGE: &str = "Eine Einstellung mit diesem Schlüssel existiert bereits.";

/// 设置用例，所有操作按 `key` 寻址
pub struct EinstellungUseCase<R: EinstellungRepository> {
    repo: Arc<R>,
}

impl<R: EinstellungRepository> EinstellungUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self) -> Result<Vec<Einstellung>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get(&self, key: &str) -> Result<Einstellung, ServiceError> {
        self.repo
            .find_by_key(key)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    /// 只取值
    pub async fn value(&self, key: &str) -> Result<String, ServiceError> {
        Ok(self.get(key).await?.value)
    }

    pub async fn create(&self, dto: CreateEinstellungDto) -> Result<Einstellung, ServiceError> {
        let new = NewEinstellung {
            key: require("key", dto.key)?,
            value: require("value", dto.value)?,
            description: dto.description,
        };

        if self.repo.find_by_key(&new.key).await?.is_some() {
            warn!("Einstellung '{}' already exists", new.key);
            return Err(ServiceError::conflict(
                UNIQUE_CONSTRAINT_VIOLATION,
                DUPLICATE_MESSAGE,
            ));
        }

        match self.repo.create(&new).await {
            Ok(einstellung) => {
                info!("Created einstellung '{}'", einstellung.key);
                Ok(einstellung)
            }
            Err(RepositoryError::UniqueViolation(_)) => Err(ServiceError::conflict(
                UNIQUE_CONSTRAINT_VIOLATION,
                DUPLICATE_MESSAGE,
            )),
            Err(e) => Err(e.into()),
        }
    }

    /// 更新设置值，`description` 仅在提供时替换
    pub async fn update(
        &self,
        key: &str,
        dto: UpdateEinstellungDto,
    ) -> Result<Einstellung, ServiceError> {
        let mut einstellung = self.get(key).await?;

        einstellung.value = require("value", dto.value)?;
        if let Some(description) = dto.description {
            einstellung.description = Some(description);
        }

        Ok(self.repo.update(&einstellung).await?)
    }

    pub async fn delete(&self, key: &str) -> Result<(), ServiceError> {
        match self.repo.delete_by_key(key).await {
            Ok(()) => {
                info!("Deleted einstellung '{}'", key);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(RESOURCE)),
            Err(e) => Err(e.into()),
        }
    }
}
