// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::kino_request::{CreateKinoDto, UpdateKinoDto};
use crate::application::dto::list_query::ListQuery;
use crate::application::use_cases::error::{require, ServiceError, FOREIGN_KEY_CONSTRAINT_VIOLATION};
use crate::application::use_cases::listing::list_records;
use crate::domain::models::kino::{Kino, NewKino};
use crate::domain::repositories::kino_repository::KinoRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::{info, warn};

const RESOURCE: &str = "Kino";
const IN_USE_MESSAGE: &str =
    "Kino kann nicht gelöscht werden, da Säle dieses Kinos noch von Besuchen verwendet werden.";

/// 影院用例
pub struct KinoUseCase<R: KinoRepository> {
    repo: Arc<R>,
}

impl<R: KinoRepository> KinoUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 列出影院，提供搜索词时按名称模糊搜索
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Kino>, ServiceError> {
        let kinos = self.repo.find_all().await?;
        Ok(list_records("kinos", query, kinos))
    }

    pub async fn get(&self, id: i32) -> Result<Kino, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn create(&self, dto: CreateKinoDto) -> Result<Kino, ServiceError> {
        let new = NewKino {
            name: require("name", dto.name)?,
            ort: require("ort", dto.ort)?,
        };

        let kino = self.repo.create(&new).await?;
        info!("Created kino {} '{}' in {}", kino.id, kino.name, kino.ort);
        Ok(kino)
    }

    pub async fn update(&self, id: i32, dto: UpdateKinoDto) -> Result<Kino, ServiceError> {
        let mut kino = self.get(id).await?;

        if let Some(name) = dto.name {
            kino.name = name;
        }
        if let Some(ort) = dto.ort {
            kino.ort = ort;
        }

        Ok(self.repo.update(&kino).await?)
    }

    /// 删除影院及其全部影厅
    ///
    /// 任一影厅仍被观影记录引用时拒绝删除，影院和影厅都保持不变。
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        self.get(id).await?;

        let in_use = self.repo.count_besuche_in_kino(id).await?;
        if in_use > 0 {
            warn!("Kino {} has saele used by {} besuche", id, in_use);
            return Err(ServiceError::conflict(
                FOREIGN_KEY_CONSTRAINT_VIOLATION,
                IN_USE_MESSAGE,
            ));
        }

        match self.repo.delete_with_saele(id).await {
            Ok(()) => {
                info!("Deleted kino {}", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(RESOURCE)),
            // 预检查与删除之间新增了观影记录
            Err(RepositoryError::ForeignKeyViolation(detail)) => {
                warn!("Kino {} became referenced during delete: {}", id, detail);
                Err(ServiceError::conflict(
                    FOREIGN_KEY_CONSTRAINT_VIOLATION,
                    IN_USE_MESSAGE,
                ))
            }
            Err(e) => Err(e.into()),
        }
    }
}
