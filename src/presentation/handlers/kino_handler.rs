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
            kino_request::{CreateKinoDto, UpdateKinoDto},
        },
        use_cases::kino_use_case::KinoUseCase,
    },
    domain::{models::kino::Kino, repositories::kino_repository::KinoRepository},
    presentation::{
        errors::AppError,
        extractors::{ValidatedJson, ValidatedQuery},
    },
};

/// 列出影院，支持按名称模糊搜索
pub async fn list_kinos<R: KinoRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<Vec<Kino>>, AppError> {
    let use_case = KinoUseCase::new(repo);
    Ok(Json(use_case.list(&query).await?))
}

pub async fn create_kino<R: KinoRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<CreateKinoDto>,
) -> Result<(StatusCode, Json<Kino>), AppError> {
    let use_case = KinoUseCase::new(repo);
    let kino = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(kino)))
}

pub async fn get_kino<R: KinoRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<Json<Kino>, AppError> {
    let use_case = KinoUseCase::new(repo);
    Ok(Json(use_case.get(id).await?))
}

/// PUT 与 PATCH 共用，只更新请求中出现的字段
pub async fn update_kino<R: KinoRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateKinoDto>,
) -> Result<Json<Kino>, AppError> {
    let use_case = KinoUseCase::new(repo);
    Ok(Json(use_case.update(id, payload).await?))
}

pub async fn delete_kino<R: KinoRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let use_case = KinoUseCase::new(repo);
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
