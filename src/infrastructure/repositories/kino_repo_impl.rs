// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::kino::{Kino, NewKino};
use crate::domain::repositories::kino_repository::KinoRepository;
use crate::domain::repositories::RepositoryError;
use crate::infrastructure::database::entities::{besuch, kino, saal};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;

/// 影院仓库实现
#[derive(Clone)]
pub struct KinoRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl KinoRepositoryImpl {
    /// 创建新的影院仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KinoRepository for KinoRepositoryImpl {
    async fn find_all(&self) -> Result<Vec<Kino>, RepositoryError> {
        let models = kino::Entity::find()
            .order_by_asc(kino::Column::Id)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Kino>, RepositoryError> {
        let model = kino::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, new: &NewKino) -> Result<Kino, RepositoryError> {
        let now = Utc::now().fixed_offset();
        let model = kino::ActiveModel {
            name: Set(new.name.clone()),
            ort: Set(new.ort.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(self.db.as_ref()).await?.into())
    }

    async fn update(&self, record: &Kino) -> Result<Kino, RepositoryError> {
        let model = kino::ActiveModel {
            id: Unchanged(record.id),
            name: Set(record.name.clone()),
            ort: Set(record.ort.clone()),
            created_at: Unchanged(record.created_at.fixed_offset()),
            updated_at: Set(Utc::now().fixed_offset()),
        };

        Ok(model.update(self.db.as_ref()).await?.into())
    }

    async fn count_besuche_in_kino(&self, kino_id: i32) -> Result<u64, RepositoryError> {
        let count = besuch::Entity::find()
            .inner_join(saal::Entity)
            .filter(saal::Column::KinoId.eq(kino_id))
            .count(self.db.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete_with_saele(&self, id: i32) -> Result<(), RepositoryError> {
        let txn = self.db.begin().await?;

        if kino::Entity::find_by_id(id).one(&txn).await?.is_none() {
            return Err(RepositoryError::NotFound);
        }

        // 影厅仍被引用时外键约束会使这里失败，txn 被丢弃即回滚
        let removed = saal::Entity::delete_many()
            .filter(saal::Column::KinoId.eq(id))
            .exec(&txn)
            .await?;
        kino::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        tracing::debug!(
            "Deleted kino {} together with {} saele",
            id,
            removed.rows_affected
        );
        Ok(())
    }
}

impl From<kino::Model> for Kino {
    fn from(model: kino::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            ort: model.ort,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
