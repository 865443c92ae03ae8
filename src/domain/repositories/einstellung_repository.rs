// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::einstellung::{Einstellung, NewEinstellung};
use async_trait::async_trait;

/// 设置仓库特质
///
/// 设置按 `key` 寻址，不暴露数值ID的查询
#[async_trait]
pub trait EinstellungRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Einstellung>, RepositoryError>;
    async fn find_by_key(&self, key: &str) -> Result<Option<Einstellung>, RepositoryError>;
    async fn create(&self, new: &NewEinstellung) -> Result<Einstellung, RepositoryError>;
    async fn update(&self, record: &Einstellung) -> Result<Einstellung, RepositoryError>;
    async fn delete_by_key(&self, key: &str) -> Result<(), RepositoryError>;
}
