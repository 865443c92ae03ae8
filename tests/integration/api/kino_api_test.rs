// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_kino_crud() {
    let app = create_test_app().await;

    let kino = app
        .create("/api/kinos", json!({ "name": "Kosmos", "ort": "Zürich" }))
        .await;
    let id = kino["id"].as_i64().unwrap();
    assert_eq!(kino["ort"], "Zürich");

    let response = app
        .server
        .patch(&format!("/api/kinos/{}", id))
        .json(&json!({ "ort": "Zürich Kreis 4" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["name"], "Kosmos");
    assert_eq!(updated["ort"], "Zürich Kreis 4");
    assert_eq!(updated["created_at"], kino["created_at"]);

    let response = app.server.delete(&format!("/api/kinos/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/kinos/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Kino nicht gefunden.");
}

#[tokio::test]
async fn test_create_kino_requires_name_and_ort() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/kinos")
        .json(&json!({ "name": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors = &response.json::<Value>()["errors"];
    assert!(errors["name"].is_array());
    assert!(errors["ort"].is_array());
}

#[tokio::test]
async fn test_search_kinos_by_name() {
    let app = create_test_app().await;
    app.create_kino("Pathé Spreitenbach").await;
    app.create_kino("Riffraff").await;
    app.create_kino("Pathé Basel").await;

    let response = app
        .server
        .get("/api/kinos")
        .add_query_param("query", "pathé")
        .add_query_param("limit", 1)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|kino| kino["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Pathé Basel"]);
}

#[tokio::test]
async fn test_delete_kino_removes_its_saele() {
    let app = create_test_app().await;
    let kino_id = app.create_kino("Houdini").await;
    let saal_id = app.create_saal("Saal 3", kino_id).await;
    let other_kino = app.create_kino("Xenix").await;
    let other_saal = app.create_saal("Saal 3", other_kino).await;

    let response = app.server.delete(&format!("/api/kinos/{}", kino_id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/saele/{}", saal_id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.server.get(&format!("/api/saele/{}", other_saal)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_kino_with_besuche_conflicts() {
    let app = create_test_app().await;
    let payload = app.besuch_payload().await;
    app.create("/api/besuche", payload.clone()).await;

    let saal = app
        .server
        .get(&format!("/api/saele/{}", payload["saal_id"]))
        .await
        .json::<Value>();
    let kino_id = saal["kino_id"].as_i64().unwrap();

    let response = app.server.delete(&format!("/api/kinos/{}", kino_id)).await;
    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    let body = response.json::<Value>();
    assert_eq!(body["error"], "foreign_key_constraint_violation");
    assert_eq!(
        body["message"],
        "Kino kann nicht gelöscht werden, da Säle dieses Kinos noch von Besuchen verwendet werden."
    );

    // Kino und Saal bleiben erhalten
    let response = app.server.get(&format!("/api/kinos/{}", kino_id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let response = app
        .server
        .get(&format!("/api/saele/{}", payload["saal_id"]))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_missing_kino_returns_404() {
    let app = create_test_app().await;

    let response = app.server.delete("/api/kinos/42").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
