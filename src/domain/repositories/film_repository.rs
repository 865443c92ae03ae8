// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::film::{Film, NewFilm};
use async_trait::async_trait;

/// 电影仓库特质
#[async_trait]
pub trait FilmRepository: Send + Sync {
    /// 按ID升序返回全部记录
    async fn find_all(&self) -> Result<Vec<Film>, RepositoryError>;
    /// 根据ID查找
    async fn find_by_id(&self, id: i32) -> Result<Option<Film>, RepositoryError>;
    /// 创建并返回持久化后的记录
    async fn create(&self, new: &NewFilm) -> Result<Film, RepositoryError>;
    /// 保存全部字段并刷新 updated_at
    async fn update(&self, record: &Film) -> Result<Film, RepositoryError>;
    /// 删除记录，记录不存在时返回 NotFound
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
