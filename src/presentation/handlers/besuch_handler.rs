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
        dto::besuch_request::{CreateBesuchDto, UpdateBesuchDto},
        use_cases::besuch_use_case::BesuchUseCase,
    },
    domain::{
        models::besuch::Besuch,
        repositories::{
            besuch_repository::BesuchRepository, film_repository::FilmRepository,
            saal_repository::SaalRepository, sprache_repository::SpracheRepository,
            typ_repository::TypRepository,
        },
    },
    presentation::{errors::AppError, extractors::ValidatedJson},
};

/// 列出全部观影记录（扁平外键，不嵌套关联对象）
pub async fn list_besuche<BR, FR, TR, SR, SaR>(
    Extension(besuch_repo): Extension<Arc<BR>>,
    Extension(film_repo): Extension<Arc<FR>>,
    Extension(typ_repo): Extension<Arc<TR>>,
    Extension(sprache_repo): Extension<Arc<SR>>,
    Extension(saal_repo): Extension<Arc<SaR>>,
) -> Result<Json<Vec<Besuch>>, AppError>
where
    BR: BesuchRepository + 'static,
    FR: FilmRepository + 'static,
    TR: TypRepository + 'static,
    SR: SpracheRepository + 'static,
    SaR: SaalRepository + 'static,
{
    let use_case = BesuchUseCase::new(besuch_repo, film_repo, typ_repo, sprache_repo, saal_repo);
    Ok(Json(use_case.list().await?))
}

/// 创建观影记录
pub async fn create_besuch<BR, FR, TR, SR, SaR>(
    Extension(besuch_repo): Extension<Arc<BR>>,
    Extension(film_repo): Extension<Arc<FR>>,
    Extension(typ_repo): Extension<Arc<TR>>,
    Extension(sprache_repo): Extension<Arc<SR>>,
    Extension(saal_repo): Extension<Arc<SaR>>,
    ValidatedJson(payload): ValidatedJson<CreateBesuchDto>,
) -> Result<(StatusCode, Json<Besuch>), AppError>
where
    BR: BesuchRepository + 'static,
    FR: FilmRepository + 'static,
    TR: TypRepository + 'static,
    SR: SpracheRepository + 'static,
    SaR: SaalRepository + 'static,
{
    let use_case = BesuchUseCase::new(besuch_repo, film_repo, typ_repo, sprache_repo, saal_repo);
    let besuch = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(besuch)))
}

pub async fn get_besuch<BR, FR, TR, SR, SaR>(
    Extension(besuch_repo): Extension<Arc<BR>>,
    Extension(film_repo): Extension<Arc<FR>>,
    Extension(typ_repo): Extension<Arc<TR>>,
    Extension(sprache_repo): Extension<Arc<SR>>,
    Extension(saal_repo): Extension<Arc<SaR>>,
    Path(id): Path<i32>,
) -> Result<Json<Besuch>, AppError>
where
    BR: BesuchRepository + 'static,
    FR: FilmRepository + 'static,
    TR: TypRepository + 'static,
    SR: SpracheRepository + 'static,
    SaR: SaalRepository + 'static,
{
    let use_case = BesuchUseCase::new(besuch_repo, film_repo, typ_repo, sprache_repo, saal_repo);
    Ok(Json(use_case.get(id).await?))
}

pub async fn update_besuch<BR, FR, TR, SR, SaR>(
    Extension(besuch_repo): Extension<Arc<BR>>,
    Extension(film_repo): Extension<Arc<FR>>,
    Extension(typ_repo): Extension<Arc<TR>>,
    Extension(sprache_repo): Extension<Arc<SR>>,
    Extension(saal_repo): Extension<Arc<SaR>>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBesuchDto>,
) -> Result<Json<Besuch>, AppError>
where
    BR: BesuchRepository + 'static,
    FR: FilmRepository + 'static,
    TR: TypRepository + 'static,
    SR: SpracheRepository + 'static,
    SaR: SaalRepository + 'static,
{
    let use_case = BesuchUseCase::new(besuch_repo, film_repo, typ_repo, sprache_repo, saal_repo);
    Ok(Json(use_case.update(id, payload).await?))
}

pub async fn delete_besuch<BR, FR, TR, SR, SaR>(
    Extension(besuch_repo): Extension<Arc<BR>>,
    Extension(film_repo): Extension<Arc<FR>>,
    Extension(typ_repo): Extension<Arc<TR>>,
    Extension(sprache_repo): Extension<Arc<SR>>,
    Extension(saal_repo): Extension<Arc<SaR>>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError>
where
    BR: BesuchRepository + 'static,
    FR: FilmRepository + 'static,
    TR: TypRepository + 'static,
    SR: SpracheRepository + 'static,
    SaR: SaalRepository + 'static,
{
    let use_case = BesuchUseCase::new(besuch_repo, film_repo, typ_repo, sprache_repo, saal_repo);
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
