// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_einstellung_lifecycle() {
    let app = create_test_app().await;

    let created = app
        .create(
            "/api/einstellungen",
            json!({ "key": "waehrung", "value": "CHF", "description": "Anzeigewährung" }),
        )
        .await;
    assert_eq!(created["key"], "waehrung");
    assert_eq!(created["description"], "Anzeigewährung");

    let response = app.server.get("/api/einstellungen/waehrung").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["value"], "CHF");

    let response = app.server.get("/api/einstellungen/value/waehrung").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "value": "CHF" }));

    let response = app
        .server
        .put("/api/einstellungen/waehrung")
        .json(&json!({ "value": "EUR" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["value"], "EUR");
    assert_eq!(updated["description"], "Anzeigewährung");

    let response = app.server.delete("/api/einstellungen/waehrung").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get("/api/einstellungen/value/waehrung").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Einstellung nicht gefunden."
    );
}

#[tokio::test]
async fn test_duplicate_key_conflicts() {
    let app = create_test_app().await;
    app.create("/api/einstellungen", json!({ "key": "sprache", "value": "de" }))
        .await;

    let response = app
        .server
        .post("/api/einstellungen")
        .json(&json!({ "key": "sprache", "value": "fr" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "unique_constraint_violation");
    assert_eq!(
        body["message"],
        "Eine Einstellung mit diesem Schlüssel existiert bereits."
    );
}

#[tokio::test]
async fn test_einstellung_requires_value() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/einstellungen")
        .json(&json!({ "key": "leer" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["errors"]["value"].is_array());
}

#[tokio::test]
async fn test_list_einstellungen() {
    let app = create_test_app().await;
    app.create("/api/einstellungen", json!({ "key": "a", "value": "1" }))
        .await;
    app.create("/api/einstellungen", json!({ "key": "b", "value": "2" }))
        .await;

    let response = app.server.get("/api/einstellungen").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let keys: Vec<String> = response
        .json::<Value>()
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[tokio::test]
async fn test_missing_einstellung_update_returns_404() {
    let app = create_test_app().await;

    let response = app
        .server
        .put("/api/einstellungen/fehlt")
        .json(&json!({ "value": "x" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
