// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::{
    application::{
        dto::einstellung_request::{CreateEinstellungDto, UpdateEinstellungDto},
        use_cases::einstellung_use_case::EinstellungUseCase,
    },
    domain::{
        models::einstellung::Einstellung,
        repositories::einstellung_repository::EinstellungRepository,
    },
    presentation::{errors::AppError, extractors::ValidatedJson},
};

pub async fn list_einstellungen<R: EinstellungRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
) -> Result<Json<Vec<Einstellung>>, AppError> {
    let use_case = EinstellungUseCase::new(repo);
    Ok(Json(use_case.list().await?))
}

pub async fn create_einstellung<R: EinstellungRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<CreateEinstellungDto>,
) -> Result<(StatusCode, Json<Einstellung>), AppError> {
    let use_case = EinstellungUseCase::new(repo);
    let einstellung = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(einstellung)))
}

pub async fn get_einstellung<R: EinstellungRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(key): Path<String>,
) -> Result<Json<Einstellung>, AppError> {
    let use_case = EinstellungUseCase::new(repo);
    Ok(Json(use_case.get(&key).await?))
}

/// 只返回设置值：`{"value": "..."}`
pub async fn get_einstellung_value<R: EinstellungRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(key): Path<String>,
) -> Result<Json<Value>, AppError> {
    let use_case = EinstellungUseCase::new(repo);
    let value = use_case.value(&key).await?;
    Ok(Json(json!({ "value": value })))
}

pub async fn update_einstellung<R: EinstellungRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(key): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateEinstellungDto>,
) -> Result<Json<Einstellung>, AppError> {
    let use_case = EinstellungUseCase::new(repo);
    Ok(Json(use_case.update(&key, payload).await?))
}

pub async fn delete_einstellung<R: EinstellungRepository + 'static>(
    Extension(repo): Extension<Arc<R>>,
    Path(key): Path<String>,
) -> Result<StatusCode, AppError> {
    let use_case = EinstellungUseCase::new(repo);
    use_case.delete(&key).await?;
    Ok(StatusCode::NO_CONTENT)
}
