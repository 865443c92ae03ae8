// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::saal::{NewSaal, Saal};
use async_trait::async_trait;

/// 影厅仓库特质
#[async_trait]
pub trait SaalRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Saal>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Saal>, RepositoryError>;
    async fn create(&self, new: &NewSaal) -> Result<Saal, RepositoryError>;
    async fn update(&self, record: &Saal) -> Result<Saal, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;

    /// 检查同一影院内是否已有同名影厅
    ///
    /// # 参数
    ///
    /// * `name` - 影厅名称
    /// * `kino_id` - 影院ID
    /// * `exclude_id` - 更新时排除的影厅自身ID
    async fn exists_by_name_in_kino(
        &self,
        name: &str,
        kino_id: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, RepositoryError>;
}
