// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::list_query::ListQuery;
use crate::application::dto::typ_request::{CreateTypDto, UpdateTypDto};
use crate::application::use_cases::error::{require, ServiceError, FOREIGN_KEY_CONSTRAINT_VIOLATION};
use crate::application::use_cases::listing::list_records;
use crate::domain::models::typ::{NewTyp, Typ};
use crate::domain::repositories::typ_repository::TypRepository;
use crate::domain::repositories::RepositoryError;
use std::sync::Arc;
use tracing::{info, warn};

const RESOURCE: &str = "Typ";

/// 票种用例
pub struct TypUseCase<R: TypRepository> {
    repo: Arc<R>,
}

impl<R: TypRepository> TypUseCase<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Typ>, ServiceError> {
        let typen = self.repo.find_all().await?;
        Ok(list_records("typen", query, typen))
    }

    pub async fn get(&self, id: i32) -> Result<Typ, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(RESOURCE))
    }

    /// 创建票种，未给出附加费时记为 0.00
    pub async fn create(&self, dto: CreateTypDto) -> Result<Typ, ServiceError> {
        let new = NewTyp {
            name: require("name", dto.name)?,
            zuschlag_chf: dto.zuschlag_chf.unwrap_or(0.0),
        };

        let typ = self.repo.create(&new).await?;
        info!("Created typ {} '{}'", typ.id, typ.name);
        Ok(typ)
    }

    pub async fn update(&self, id: i32, dto: UpdateTypDto) -> Result<Typ, ServiceError> {
        let mut typ = self.get(id).await?;

        if let Some(name) = dto.name {
            typ.name = name;
        }
        if let Some(zuschlag_chf) = dto.zuschlag_chf {
            typ.zuschlag_chf = zuschlag_chf;
        }

        Ok(self.repo.update(&typ).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                info!("Deleted typ {}", id);
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(ServiceError::NotFound(RESOURCE)),
            Err(RepositoryError::ForeignKeyViolation(detail)) => {
                warn!("Typ {} is still referenced: {}", id, detail);
                Err(ServiceError::conflict(
                    FOREIGN_KEY_CONSTRAINT_VIOLATION,
                    "Typ kann nicht gelöscht werden, da er von einem oder mehreren Besuchen verwendet wird.",
                ))
            }
            Err(e) => Err(e.into()),
        }
    }
}
