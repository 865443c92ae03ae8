// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::RepositoryError;
use crate::domain::models::typ::{Typ, NewTyp};
use async_trait::async_trait;

/// 票种仓库特质
#[async_trait]
pub trait TypRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Typ>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Typ>, RepositoryError>;
    async fn create(&self, new: &NewTyp) -> Result<Typ, RepositoryError>;
    async fn update(&self, record: &Typ) -> Result<Typ, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}
