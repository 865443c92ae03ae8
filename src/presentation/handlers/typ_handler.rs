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
            typ_request::{CreateTypDto, UpdateTypDto},
        },
        use_cases::typ_use_case::TypUseCase,
    },
    domain::{models::typ::Typ, repositories::typ_repository::TypRepository},
    presentation::{
        errors::AppError,
        extractors::{ValidatedJson, ValidatedQuery},
    },
};

/// 列出票种
pub async fn list_typen<R: TypRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<Vec<Typ>>, AppError> {
    let use_case = TypUseCase::new(repo);
    Ok(Json(use_case.list(&query).await?))
}

pub async fn create_typ<R: TypRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<CreateTypDto>,
) -> Result<(StatusCode, Json<Typ>), AppError> {
    let use_case = TypUseCase::new(repo);
    let typ = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(typ)))
}

pub async fn get_typ<R: TypRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<Json<Typ>, AppError> {
    let use_case = TypUseCase::new(repo);
    Ok(Json(use_case.get(id).await?))
}

/// PUT 与 PATCH 共用，只更新请求中出现的字段
pub async fn update_typ<R: TypRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTypDto>,
) -> Result<Json<Typ>, AppError> {
    let use_case = TypUseCase::new(repo);
    Ok(Json(use_case.update(id, payload).await?))
}

pub async fn delete_typ<R: TypRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let use_case = TypUseCase::new(repo);
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
