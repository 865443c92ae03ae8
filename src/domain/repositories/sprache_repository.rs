// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::sprache::{Sprache, NewSprache};
use async_trait::async_trait;

/// 语言仓库特质
#[async_trait]
pub trait SpracheRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Sprache>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Sprache>, RepositoryError>;
    async fn create(&self, new: &NewSprache) -> Result<Sprache, RepositoryError>;
    async fn update(&self, record: &Sprache) -> Result<Sprache, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
