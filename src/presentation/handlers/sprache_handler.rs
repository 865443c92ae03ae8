// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::{
    application::{
        dto::{
            list_query::ListQuery,
            sprache_request::{CreateSpracheDto, UpdateSpracheDto},
        },
        use_cases::sprache_use_case::SpracheUseCase,
    },
    domain::{models::sprache::Sprache, repositories::sprache_repository::SpracheRepository},
    presentation::{
        errors::AppError,
        extractors::{ValidatedJson, ValidatedQuery},
    },
};

/// 列出放映语言
pub async fn list_sprachen<R: SpracheRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<Vec<Sprache>>, AppError> {
    let use_case = SpracheUseCase::new(repo);
    Ok(Json(use_case.list(&query).await?))
}

pub async fn create_sprache<R: SpracheRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<CreateSpracheDto>,
) -> Result<(StatusCode, Json<Sprache>), AppError> {
    let use_case = SpracheUseCase::new(repo);
    let sprache = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(sprache)))
}

pub async fn get_sprache<R: SpracheRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<Json<Sprache>, AppError> {
    let use_case = SpracheUseCase::new(repo);
    Ok(Json(use_case.get(id).await?))
}

/// PUT 与 PATCH 共用，只更新请求中出现的字段
pub async fn update_sprache<R: SpracheRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSpracheDto>,
) -> Result<Json<Sprache>, AppError> {
    let use_case = SpracheUseCase::new(repo);
    Ok(Json(use_case.update(id, payload).await?))
}

pub async fn delete_sprache<R: SpracheRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let use_case = SpracheUseCase::new(repo);
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
