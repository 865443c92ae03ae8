// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::kino::{Kino, NewKino};
use async_trait::async_trait;

/// 影院仓库特质
#[async_trait]
pub trait KinoRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Kino>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Kino>, RepositoryError>;
    async fn create(&self, new: &NewKino) -> Result<Kino, RepositoryError>;
    async fn update(&self, record: &Kino) -> Result<Kino, RepositoryError>;

    /// 统计引用该影院任一影厅的观影记录数
    async fn count_besuche_in_kino(&self, kino_id: i32) -> Result<u64, RepositoryError>;

    /// 在同一事务中先删除影院的全部影厅，再删除影院本身
    ///
    /// # 返回值
    ///
    /// * `Ok(())` - 删除成功
    /// * `Err(RepositoryError::NotFound)` - 影院不存在
    /// * `Err(RepositoryError::ForeignKeyViolation)` - 影厅仍被引用，事务已回滚
    async fn delete_with_saele(&self, id: i32) -> Result<(), RepositoryError>;
}
