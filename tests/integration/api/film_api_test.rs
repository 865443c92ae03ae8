// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

fn titles(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|film| film["filmtitel"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_create_and_get_film() {
    let app = create_test_app().await;

    let created = app
        .create(
            "/api/filme",
            json!({ "filmtitel": "Oppenheimer", "bild_url": "https://img.example.com/o.jpg" }),
        )
        .await;
    assert_eq!(created["filmtitel"], "Oppenheimer");
    assert!(created["created_at"].is_string());

    let id = created["id"].as_i64().unwrap();
    let response = app.server.get(&format!("/api/filme/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["bild_url"], "https://img.example.com/o.jpg");
}

#[tokio::test]
async fn test_create_film_validation_errors() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/filme")
        .json(&json!({ "bild_url": "kein-link" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Die angegebenen Daten sind ungültig.");
    assert!(body["errors"]["filmtitel"].is_array());
    assert!(body["errors"]["bild_url"].is_array());
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/filme")
        .text("{\"filmtitel\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["errors"]["body"].is_array());
}

#[tokio::test]
async fn test_search_ranks_prefix_matches_first() {
    let app = create_test_app().await;
    for title in ["Starship Troopers", "Die Hard", "Lone Star", "Star Wars"] {
        app.create_film(title).await;
    }

    let response = app
        .server
        .get("/api/filme")
        .add_query_param("query", "star")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(titles(&body), vec!["Star Wars", "Lone Star", "Starship Troopers"]);
}

#[tokio::test]
async fn test_search_is_case_insensitive_and_accepts_q_alias() {
    let app = create_test_app().await;
    app.create_film("Amélie").await;
    app.create_film("Matrix").await;

    let response = app.server.get("/api/filme").add_query_param("q", "AMÉ").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(titles(&response.json::<Value>()), vec!["Amélie"]);
}

#[tokio::test]
async fn test_list_respects_limit() {
    let app = create_test_app().await;
    for i in 1..=12 {
        app.create_film(&format!("Film {}", i)).await;
    }

    let default_list = app.server.get("/api/filme").await.json::<Value>();
    assert_eq!(default_list.as_array().unwrap().len(), 10);

    let limited = app
        .server
        .get("/api/filme")
        .add_query_param("limit", 3)
        .await
        .json::<Value>();
    assert_eq!(titles(&limited), vec!["Film 1", "Film 2", "Film 3"]);

    let searched = app
        .server
        .get("/api/filme")
        .add_query_param("query", "film")
        .add_query_param("limit", 20)
        .await
        .json::<Value>();
    assert_eq!(searched.as_array().unwrap().len(), 12);
}

#[tokio::test]
async fn test_invalid_list_parameters() {
    let app = create_test_app().await;

    let response = app.server.get("/api/filme").add_query_param("limit", 0).await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["errors"]["limit"].is_array());

    let response = app
        .server
        .get("/api/filme")
        .add_query_param("query", "x".repeat(256))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_update_and_patch_film() {
    let app = create_test_app().await;
    let id = app.create_film("Dnue").await;

    let response = app
        .server
        .put(&format!("/api/filme/{}", id))
        .json(&json!({ "filmtitel": "Dune" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["filmtitel"], "Dune");
    assert_eq!(body["bild_url"], "https://img.example.com/poster.jpg");

    let response = app
        .server
        .patch(&format!("/api/filme/{}", id))
        .json(&json!({ "bild_url": "https://img.example.com/dune.jpg" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    assert_eq!(body["filmtitel"], "Dune");
    assert_eq!(body["bild_url"], "https://img.example.com/dune.jpg");
}

#[tokio::test]
async fn test_missing_film_returns_404() {
    let app = create_test_app().await;

    let response = app.server.get("/api/filme/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Film nicht gefunden.");
    assert_eq!(body["error"], "resource_not_found");

    let response = app
        .server
        .put("/api/filme/999")
        .json(&json!({ "filmtitel": "Nichts" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = app.server.delete("/api/filme/999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_film() {
    let app = create_test_app().await;
    let id = app.create_film("Tenet").await;

    let response = app.server.delete(&format!("/api/filme/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/filme/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_film_in_use_conflicts() {
    let app = create_test_app().await;
    let payload = app.besuch_payload().await;
    app.create("/api/besuche", payload.clone()).await;

    let response = app
        .server
        .delete(&format!("/api/filme/{}", payload["film_id"]))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        response.json::<Value>()["error"],
        "foreign_key_constraint_violation"
    );
}
