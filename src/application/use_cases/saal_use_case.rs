// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::saal_request::{CreateSaalDto, UpdateSaalDto};
use crate::application::use_cases::error::{
    require, ServiceError, FOREIGN_KEY_CONSTRAINT_VIOLATION, UNIQUE_CONSTRAINT_VIOLATION,
};
use crate::domain::models::saal::{NewSaal, Saal};
use crate::domain::repositories::kino_repository::KinoRepository;
use crate::domain::repositories::saal_repository::SaalRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::{info, warn};

const RESOURCE: &str = "Saal";
const DUPLICATE_MESSAGE: &str = "Ein Saal mit diesem Namen existiert in diesem Kino bereits.";

/// 影厅用例
///
/// 影厅必须属于已存在的影院，且在同一影院内名称唯一。
pub struct SaalUseCase<SR, KR> {
    saal_repo: Arc<SR>,
    kino_repo: Arc<KR>,
}

impl<SR, KR> SaalUseCase<SR, KR>
where
    SR: SaalRepository + 'static,
    KR: KinoRepository + 'static,
{
    pub fn new(saal_repo: Arc<SR>, kino_repo: Arc<KR>) -> Self {
        Self {
            saal_repo,
            kino_repo,
        }
    }

    /// 影厅列表不支持搜索，返回全部记录
    pub async fn list(&self) -> Result<Vec<Saal>, ServiceError> {
        Ok(self.saal_repo.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<Saal, ServiceError> {
        self.saal_repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    pub async fn create(&self, dto: CreateSaalDto) -> Result<Saal, ServiceError> {
        let new = NewSaal {
            name: require("name", dto.name)?,
            kino_id: require("kino_id", dto.kino_id)?,
        };

        self.ensure_kino_exists(new.kino_id).await?;
        self.ensure_unique(&new.name, new.kino_id, None).await?;

        let saal = self.saal_repo.create(&new).await.map_err(duplicate_to_conflict)?;
        info!("Created saal {} '{}' in kino {}", saal.id, saal.name, saal.kino_id);
        Ok(saal)
    }

    /// 更新影厅
    ///
    /// 唯一性检查使用新的 `kino_id`（未提供时使用原值），并排除影厅自身
    pub async fn update(&self, id: i32, dto: UpdateSaalDto) -> Result<Saal, ServiceError> {
        let mut saal = self.get(id).await?;

        if let Some(kino_id) = dto.kino_id {
            self.ensure_kino_exists(kino_id).await?;
            saal.kino_id = kino_id;
        }
        if let Some(name) = dto.name {
            saal.name = name;
        }

        self.ensure_unique(&saal.name, saal.kino_id, Some(saal.id))
            .await?;

        Ok(self
            .saal_repo
            .update(&saal)
            .await
            .map_err(duplicate_to_conflict)?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.saal_repo.delete(id).await {
            Ok(()) => {
                info!("Deleted saal {}", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(RESOURCE)),
            Err(RepositoryError::ForeignKeyViolation(detail)) => {
                warn!("Saal {} is still referenced: {}", id, detail);
                Err(ServiceError::conflict(
                    FOREIGN_KEY_CONSTRAINT_VIOLATION,
                    "Saal kann nicht gelöscht werden, da er von einem oder mehreren Besuchen verwendet wird.",
                ))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn ensure_kino_exists(&self, kino_id: i32) -> Result<(), ServiceError> {
        if self.kino_repo.find_by_id(kino_id).await?.is_none() {
            return Err(ServiceError::field(
                "kino_id",
                "Der gewählte Wert für kino_id ist ungültig.",
            ));
        }
        Ok(())
    }

    async fn ensure_unique(
        &self,
        name: &str,
        kino_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<(), ServiceError> {
        if self
            .saal_repo
            .exists_by_name_in_kino(name, kino_id, exclude_id)
            .await?
        {
            warn!("Saal '{}' already exists in kino {}", name, kino_id);
            return Err(ServiceError::conflict(
                UNIQUE_CONSTRAINT_VIOLATION,
                DUPLICATE_MESSAGE,
            ));
        }
        Ok(())
    }
}

fn duplicate_to_conflict(err: RepositoryError) -> ServiceError {
    match err {
        RepositoryError::UniqueViolation(_) => {
            ServiceError::conflict(UNIQUE_CONSTRAINT_VIOLATION, DUPLICATE_MESSAGE)
        }
        other => other.into(),
    }
}
