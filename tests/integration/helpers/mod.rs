// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use axum_test::TestServer;
use kinobesuche::config::settings::DatabaseSettings;
use kinobesuche::infrastructure::database::connection;
use kinobesuche::presentation::routes;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::sync::Arc;

#[allow(dead_code)]
pub struct TestApp {
    pub server: TestServer,
    pub db_pool: Arc<DatabaseConnection>,
}

/// 内存 SQLite 数据库，单连接保证所有请求看到同一份数据
pub async fn create_test_db() -> Arc<DatabaseConnection> {
    let settings = DatabaseSettings {
        url: "sqlite::memory:".to_string(),
        max_connections: Some(1),
        min_connections: Some(1),
        connect_timeout: Some(5),
        idle_timeout: None,
    };

    let db = connection::create_pool(&settings)
        .await
        .expect("Failed to create database pool");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    Arc::new(db)
}

pub async fn create_test_app() -> TestApp {
    let db_pool = create_test_db().await;
    let server = TestServer::new(routes::app(db_pool.clone())).unwrap();

    TestApp { server, db_pool }
}

impl TestApp {
    /// POST 并断言 201，返回响应体
    pub async fn create(&self, path: &str, body: Value) -> Value {
        let response = self.server.post(path).json(&body).await;
        assert_eq!(
            response.status_code(),
            StatusCode::CREATED,
            "POST {} failed: {}",
            path,
            response.text()
        );
        response.json::<Value>()
    }

    pub async fn create_film(&self, filmtitel: &str) -> i64 {
        let film = self
            .create(
                "/api/filme",
                json!({ "filmtitel": filmtitel, "bild_url": "https://img.example.com/poster.jpg" }),
            )
            .await;
        film["id"].as_i64().unwrap()
    }

    pub async fn create_kino(&self, name: &str) -> i64 {
        let kino = self
            .create("/api/kinos", json!({ "name": name, "ort": "Zürich" }))
            .await;
        kino["id"].as_i64().unwrap()
    }

    pub async fn create_saal(&self, name: &str, kino_id: i64) -> i64 {
        let saal = self
            .create("/api/saele", json!({ "name": name, "kino_id": kino_id }))
            .await;
        saal["id"].as_i64().unwrap()
    }

    pub async fn create_sprache(&self, name: &str) -> i64 {
        let sprache = self.create("/api/sprachen", json!({ "name": name })).await;
        sprache["id"].as_i64().unwrap()
    }

    pub async fn create_typ(&self, name: &str, zuschlag_chf: f64) -> i64 {
        let typ = self
            .create("/api/typen", json!({ "name": name, "zuschlag_chf": zuschlag_chf }))
            .await;
        typ["id"].as_i64().unwrap()
    }

    /// 建好一个观影记录所需的全部关联数据，返回完整的请求体
    pub async fn besuch_payload(&self) -> Value {
        let film_id = self.create_film("Dune: Part Two").await;
        let kino_id = self.create_kino("Arena Cinemas").await;
        let saal_id = self.create_saal("Saal 1", kino_id).await;
        let sprache_id = self.create_sprache("Englisch").await;
        let typ_id = self.create_typ("Erwachsene", 19.5).await;

        json!({
            "anfang": "2025-04-02 20:00:00",
            "ende": "2025-04-02 22:46:00",
            "reihe": "F",
            "platz": 12,
            "untertitel": true,
            "snackzuschlag_chf": 8.5,
            "film_id": film_id,
            "typ_id": typ_id,
            "sprache_id": sprache_id,
            "saal_id": saal_id,
        })
    }
}
