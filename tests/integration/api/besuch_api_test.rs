// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn test_create_besuch_returns_flat_record() {
    let app = create_test_app().await;
    let payload = app.besuch_payload().await;

    let besuch = app.create("/api/besuche", payload.clone()).await;

    assert_eq!(besuch["anfang"], "2025-04-02T20:00:00");
    assert_eq!(besuch["ende"], "2025-04-02T22:46:00");
    assert_eq!(besuch["reihe"], "F");
    assert_eq!(besuch["platz"], 12);
    assert_eq!(besuch["untertitel"], true);
    assert_eq!(besuch["snackzuschlag_chf"].as_f64(), Some(8.5));
    for field in ["film_id", "typ_id", "sprache_id", "saal_id"] {
        assert_eq!(besuch[field], payload[field], "{}", field);
    }
    assert!(besuch.get("film").is_none());

    let response = app.server.get("/api/besuche").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_besuch_accepts_rfc3339_dates() {
    let app = create_test_app().await;
    let mut payload = app.besuch_payload().await;
    payload["anfang"] = json!("2025-04-02T20:00:00+02:00");
    payload["ende"] = json!("2025-04-02T22:46");
    payload["snackzuschlag_chf"] = Value::Null;

    let besuch = app.create("/api/besuche", payload).await;

    assert_eq!(besuch["anfang"], "2025-04-02T20:00:00");
    assert_eq!(besuch["ende"], "2025-04-02T22:46:00");
    assert!(besuch["snackzuschlag_chf"].is_null());
}

#[tokio::test]
async fn test_create_besuch_reports_missing_fields() {
    let app = create_test_app().await;

    let response = app.server.post("/api/besuche").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    let errors = body["errors"].as_object().unwrap();
    for field in [
        "anfang",
        "ende",
        "reihe",
        "platz",
        "untertitel",
        "film_id",
        "typ_id",
        "sprache_id",
        "saal_id",
    ] {
        assert!(errors.contains_key(field), "missing error for {}", field);
    }
    assert!(!errors.contains_key("snackzuschlag_chf"));
}

#[tokio::test]
async fn test_create_besuch_rejects_unknown_references() {
    let app = create_test_app().await;
    let mut payload = app.besuch_payload().await;
    payload["film_id"] = json!(900);
    payload["saal_id"] = json!(901);

    let response = app.server.post("/api/besuche").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(
        body["errors"]["film_id"][0],
        "Der gewählte Wert für film_id ist ungültig."
    );
    assert_eq!(
        body["errors"]["saal_id"][0],
        "Der gewählte Wert für saal_id ist ungültig."
    );
    assert!(body["errors"].get("typ_id").is_none());
}

#[tokio::test]
async fn test_create_besuch_field_rules() {
    let app = create_test_app().await;
    let mut payload = app.besuch_payload().await;
    payload["reihe"] = json!("AB");
    payload["platz"] = json!(0);
    payload["anfang"] = json!("morgen");

    let response = app.server.post("/api/besuche").json(&payload).await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let errors = &response.json::<Value>()["errors"];
    assert!(errors["reihe"].is_array());
    assert!(errors["platz"].is_array());
    assert_eq!(errors["anfang"][0], "Das Feld anfang muss ein gültiges Datum sein.");
}

#[tokio::test]
async fn test_patch_besuch_changes_only_given_fields() {
    let app = create_test_app().await;
    let payload = app.besuch_payload().await;
    let besuch = app.create("/api/besuche", payload).await;
    let id = besuch["id"].as_i64().unwrap();
    let new_typ = app.create_typ("Student", 14.0).await;

    let response = app
        .server
        .patch(&format!("/api/besuche/{}", id))
        .json(&json!({ "platz": 13, "typ_id": new_typ, "snackzuschlag_chf": null }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Value>();
    assert_eq!(updated["platz"], 13);
    assert_eq!(updated["typ_id"].as_i64(), Some(new_typ));
    assert_eq!(updated["reihe"], "F");
    assert_eq!(updated["film_id"], besuch["film_id"]);
    assert_eq!(updated["snackzuschlag_chf"].as_f64(), Some(8.5));
}

#[tokio::test]
async fn test_update_besuch_with_unknown_reference() {
    let app = create_test_app().await;
    let payload = app.besuch_payload().await;
    let besuch = app.create("/api/besuche", payload).await;

    let response = app
        .server
        .put(&format!("/api/besuche/{}", besuch["id"]))
        .json(&json!({ "sprache_id": 404 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["errors"]["sprache_id"].is_array());
}

#[tokio::test]
async fn test_delete_besuch() {
    let app = create_test_app().await;
    let payload = app.besuch_payload().await;
    let besuch = app.create("/api/besuche", payload.clone()).await;
    let id = besuch["id"].as_i64().unwrap();

    let response = app.server.delete(&format!("/api/besuche/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let response = app.server.get(&format!("/api/besuche/{}", id)).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    // Nach dem Löschen ist der Film frei
    let response = app
        .server
        .delete(&format!("/api/filme/{}", payload["film_id"]))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
}
