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
            film_request::{CreateFilmDto, UpdateFilmDto},
        },
        use_cases::film_use_case::FilmUseCase,
    },
    domain::{models::film::Film, repositories::film_repository::FilmRepository},
    presentation::{
        errors::AppError,
        extractors::{ValidatedJson, ValidatedQuery},
    },
};

/// 列出电影，支持 `query`/`q` 模糊搜索片名
pub async fn list_filme<R: FilmRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedQuery(query): ValidatedQuery<ListQuery>,
) -> Result<Json<Vec<Film>>, AppError> {
    let use_case = FilmUseCase::new(repo);
    Ok(Json(use_case.list(&query).await?))
}

pub async fn create_film<R: FilmRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<CreateFilmDto>,
) -> Result<(StatusCode, Json<Film>), AppError> {
    let use_case = FilmUseCase::new(repo);
    let film = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(film)))
}

pub async fn get_film<R: FilmRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<Json<Film>, AppError> {
    let use_case = FilmUseCase::new(repo);
    Ok(Json(use_case.get(id).await?))
}

/// PUT 与 PATCH 共用，只更新请求中出现的字段
pub async fn update_film<R: FilmRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateFilmDto>,
) -> Result<Json<Film>, AppError> {
    let use_case = FilmUseCase::new(repo);
    Ok(Json(use_case.update(id, payload).await?))
}

pub async fn delete_film<R: FilmRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let use_case = FilmUseCase::new(repo);
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
