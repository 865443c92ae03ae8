// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::infrastructure::repositories::{
    besuch_repo_impl::BesuchRepositoryImpl, einstellung_repo_impl::EinstellungRepositoryImpl,
    film_repo_impl::FilmRepositoryImpl, kino_repo_impl::KinoRepositoryImpl,
    saal_repo_impl::SaalRepositoryImpl, sprache_repo_impl::SpracheRepositoryImpl,
    typ_repo_impl::TypRepositoryImpl,
};
use crate::presentation::handlers::{
    besuch_handler, einstellung_handler, film_handler, kino_handler, saal_handler,
    sprache_handler, typ_handler,
};
use axum::{routing::get, Extension, Router};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 创建应用路由
///
/// 资源路由挂载在 `/api` 下，更新同时接受 PUT 与 PATCH
///
/// # 返回值
///
/// 返回配置好的路由，仓库需通过 `Extension` 注入（见 [`app`]）
pub fn routes() -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version));

    Router::new()
        .merge(public_routes)
        .nest("/api", api_routes())
}

fn api_routes() -> Router {
    Router::new()
        .route(
            "/filme",
            get(film_handler::list_filme::<FilmRepositoryImpl>)
                .post(film_handler::create_film::<FilmRepositoryImpl>),
        )
        .route(
            "/filme/{id}",
            get(film_handler::get_film::<FilmRepositoryImpl>)
                .put(film_handler::update_film::<FilmRepositoryImpl>)
                .patch(film_handler::update_film::<FilmRepositoryImpl>)
                .delete(film_handler::delete_film::<FilmRepositoryImpl>),
        )
        .route(
            "/kinos",
            get(kino_handler::list_kinos::<KinoRepositoryImpl>)
                .post(kino_handler::create_kino::<KinoRepositoryImpl>),
        )
        .route(
            "/kinos/{id}",
            get(kino_handler::get_kino::<KinoRepositoryImpl>)
                .put(kino_handler::update_kino::<KinoRepositoryImpl>)
                .patch(kino_handler::update_kino::<KinoRepositoryImpl>)
                .delete(kino_handler::delete_kino::<KinoRepositoryImpl>),
        )
        .route(
            "/saele",
            get(saal_handler::list_saele::<SaalRepositoryImpl, KinoRepositoryImpl>)
                .post(saal_handler::create_saal::<SaalRepositoryImpl, KinoRepositoryImpl>),
        )
        .route(
            "/saele/{id}",
            get(saal_handler::get_saal::<SaalRepositoryImpl, KinoRepositoryImpl>)
                .put(saal_handler::update_saal::<SaalRepositoryImpl, KinoRepositoryImpl>)
                .patch(saal_handler::update_saal::<SaalRepositoryImpl, KinoRepositoryImpl>)
                .delete(saal_handler::delete_saal::<SaalRepositoryImpl, KinoRepositoryImpl>),
        )
        .route(
            "/sprachen",
            get(sprache_handler::list_sprachen::<SpracheRepositoryImpl>)
                .post(sprache_handler::create_sprache::<SpracheRepositoryImpl>),
        )
        .route(
            "/sprachen/{id}",
            get(sprache_handler::get_sprache::<SpracheRepositoryImpl>)
                .put(sprache_handler::update_sprache::<SpracheRepositoryImpl>)
                .patch(sprache_handler::update_sprache::<SpracheRepositoryImpl>)
                .delete(sprache_handler::delete_sprache::<SpracheRepositoryImpl>),
        )
        .route(
            "/typen",
            get(typ_handler::list_typen::<TypRepositoryImpl>)
                .post(typ_handler::create_typ::<TypRepositoryImpl>),
        )
        .route(
            "/typen/{id}",
            get(typ_handler::get_typ::<TypRepositoryImpl>)
                .put(typ_handler::update_typ::<TypRepositoryImpl>)
                .patch(typ_handler::update_typ::<TypRepositoryImpl>)
                .delete(typ_handler::delete_typ::<TypRepositoryImpl>),
        )
        .route(
            "/besuche",
            get(besuch_handler::list_besuche::<
                BesuchRepositoryImpl,
                FilmRepositoryImpl,
                TypRepositoryImpl,
                SpracheRepositoryImpl,
                SaalRepositoryImpl,
            >)
            .post(
                besuch_handler::create_besuch::<
                    BesuchRepositoryImpl,
                    FilmRepositoryImpl,
                    TypRepositoryImpl,
                    SpracheRepositoryImpl,
                    SaalRepositoryImpl,
                >,
            ),
        )
        .route(
            "/besuche/{id}",
            get(besuch_handler::get_besuch::<
                BesuchRepositoryImpl,
                FilmRepositoryImpl,
                TypRepositoryImpl,
                SpracheRepositoryImpl,
                SaalRepositoryImpl,
            >)
            .put(
                besuch_handler::update_besuch::<
                    BesuchRepositoryImpl,
                    FilmRepositoryImpl,
                    TypRepositoryImpl,
                    SpracheRepositoryImpl,
                    SaalRepositoryImpl,
                >,
            )
            .patch(
                besuch_handler::update_besuch::<
                    BesuchRepositoryImpl,
                    FilmRepositoryImpl,
                    TypRepositoryImpl,
                    SpracheRepositoryImpl,
                    SaalRepositoryImpl,
                >,
            )
            .delete(
                besuch_handler::delete_besuch::<
                    BesuchRepositoryImpl,
                    FilmRepositoryImpl,
                    TypRepositoryImpl,
                    SpracheRepositoryImpl,
                    SaalRepositoryImpl,
                >,
            ),
        )
        .route(
            "/einstellungen",
            get(einstellung_handler::list_einstellungen::<EinstellungRepositoryImpl>)
                .post(einstellung_handler::create_einstellung::<EinstellungRepositoryImpl>),
        )
        .route(
            "/einstellungen/{key}",
            get(einstellung_handler::get_einstellung::<EinstellungRepositoryImpl>)
                .put(einstellung_handler::update_einstellung::<EinstellungRepositoryImpl>)
                .delete(einstellung_handler::delete_einstellung::<EinstellungRepositoryImpl>),
        )
        .route(
            "/einstellungen/value/{key}",
            get(einstellung_handler::get_einstellung_value::<EinstellungRepositoryImpl>),
        )
}

/// 组装完整应用：路由、仓库注入和请求追踪
pub fn app(db: Arc<DatabaseConnection>) -> Router {
    routes()
        .layer(Extension(Arc::new(FilmRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(KinoRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(SaalRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(SpracheRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(TypRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(BesuchRepositoryImpl::new(db.clone()))))
        .layer(Extension(Arc::new(EinstellungRepositoryImpl::new(db))))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
