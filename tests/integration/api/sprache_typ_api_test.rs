// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_sprache_crud_and_search() {
    let app = create_test_app().await;
    app.create_sprache("Deutsch").await;
    let englisch = app.create_sprache("Englisch").await;
    app.create_sprache("Französisch").await;

    let response = app
        .server
        .get("/api/sprachen")
        .add_query_param("query", "sch")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 3);

    let response = app
        .server
        .put(&format!("/api/sprachen/{}", englisch))
        .json(&json!({ "name": "Englisch (OV)" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["name"], "Englisch (OV)");

    let response = app.server.delete(&format!("/api/sprachen/{}", englisch)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_sprache_name_too_long() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/sprachen")
        .json(&json!({ "name": "x".repeat(256) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["errors"]["name"].is_array());
}

#[tokio::test]
async fn test_typ_zuschlag_defaults_to_zero() {
    let app = create_test_app().await;

    let typ = app.create("/api/typen", json!({ "name": "Kind" })).await;

    assert_eq!(typ["zuschlag_chf"].as_f64(), Some(0.0));
}

#[tokio::test]
async fn test_typ_zuschlag_is_rounded_to_rappen() {
    let app = create_test_app().await;

    let typ = app
        .create("/api/typen", json!({ "name": "Erwachsene", "zuschlag_chf": 3.456 }))
        .await;
    let id = typ["id"].as_i64().unwrap();
    assert_eq!(typ["zuschlag_chf"].as_f64(), Some(3.46));

    let response = app.server.get(&format!("/api/typen/{}", id)).await;
    assert_eq!(response.json::<Value>()["zuschlag_chf"].as_f64(), Some(3.46));
}

#[tokio::test]
async fn test_typ_zuschlag_out_of_range() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/typen")
        .json(&json!({ "name": "Premium", "zuschlag_chf": 1000 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["errors"]["zuschlag_chf"].is_array());
}

#[tokio::test]
async fn test_delete_typ_in_use_conflicts() {
    let app = create_test_app().await;
    let payload = app.besuch_payload().await;
    app.create("/api/besuche", payload.clone()).await;

    let response = app
        .server
        .delete(&format!("/api/typen/{}", payload["typ_id"]))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);

    let response = app
        .server
        .delete(&format!("/api/sprachen/{}", payload["sprache_id"]))
        .await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}
