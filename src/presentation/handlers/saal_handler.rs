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
        dto::saal_request::{CreateSaalDto, UpdateSaalDto},
        use_cases::saal_use_case::SaalUseCase,
    },
    domain::{
        models::saal::Saal,
        repositories::{kino_repository::KinoRepository, saal_repository::SaalRepository},
    },
    presentation::{errors::AppError, extractors::ValidatedJson},
};

/// 列出全部影厅
pub async fn list_saele<SR, KR>(
    Extension(saal_repo): Extension<Arc<SR>>,
    Extension(kino_repo): Extension<Arc<KR>>,
) -> Result<Json<Vec<Saal>>, AppError>
where
    SR: SaalRepository + 'static,
    KR: KinoRepository + 'static,
{
    let use_case = SaalUseCase::new(saal_repo, kino_repo);
    Ok(Json(use_case.list().await?))
}

/// 创建影厅，同一影院内重名返回 409
pub async fn create_saal<SR, KR>(
    Extension(saal_repo): Extension<Arc<SR>>,
    Extension(kino_repo): Extension<Arc<KR>>,
    ValidatedJson(payload): ValidatedJson<CreateSaalDto>,
) -> Result<(StatusCode, Json<Saal>), AppError>
where
    SR: SaalRepository + 'static,
    KR: KinoRepository + 'static,
{
    let use_case = SaalUseCase::new(saal_repo, kino_repo);
    let saal = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(saal)))
}

pub async fn get_saal<SR, KR>(
    Extension(saal_repo): Extension<Arc<SR>>,
    Extension(kino_repo): Extension<Arc<KR>>,
    Path(id): Path<i32>,
) -> Result<Json<Saal>, AppError>
where
    SR: SaalRepository + 'static,
    KR: KinoRepository + 'static,
{
    let use_case = SaalUseCase::new(saal_repo, kino_repo);
    Ok(Json(use_case.get(id).await?))
}

pub async fn update_saal<SR, KR>(
    Extension(saal_repo): Extension<Arc<SR>>,
    Extension(kino_repo): Extension<Arc<KR>>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSaalDto>,
) -> Result<Json<Saal>, AppError>
where
    SR: SaalRepository + 'static,
    KR: KinoRepository + 'static,
{
    let use_case = SaalUseCase::new(saal_repo, kino_repo);
    Ok(Json(use_case.update(id, payload).await?))
}

pub async fn delete_saal<SR, KR>(
    Extension(saal_repo): Extension<Arc<SR>>,
    Extension(kino_repo): Extension<Arc<KR>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError>
where
    SR: SaalRepository + 'static,
    KR: KinoRepository + 'static,
{
    let use_case = SaalUseCase::new(saal_repo, kino_repo);
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
