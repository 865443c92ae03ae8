// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::use_cases::error::{ServiceError, INTERNAL_ERROR, RESOURCE_NOT_FOUND};
use crate::domain::repositories::RepositoryError;

const INTERNAL_MESSAGE: &str = "Ein interner Fehler ist aufgetreten.";

/// 应用错误类型
///
/// 封装所有可能的应用层错误，提供统一的错误处理接口。
/// 响应体统一为 `{"message": ..., "error": <code>}`，校验错误为
/// `{"message": ..., "errors": {字段: [消息]}}`。
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(service_error) = self.0.downcast_ref::<ServiceError>() {
            return match service_error {
                ServiceError::Validation(fields) => (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({
                        "message": service_error.to_string(),
                        "errors": fields,
                    })),
                )
                    .into_response(),
                ServiceError::NotFound(_) => not_found(service_error.to_string()),
                ServiceError::Conflict { code, message } => (
                    StatusCode::CONFLICT,
                    Json(json!({ "message": message, "error": code })),
                )
                    .into_response(),
                ServiceError::Repository(RepositoryError::NotFound) => {
                    not_found("Ressource nicht gefunden.".to_string())
                }
                ServiceError::Repository(repo_error) => internal(repo_error),
            };
        }

        match self.0.downcast_ref::<RepositoryError>() {
            Some(RepositoryError::NotFound) => not_found("Ressource nicht gefunden.".to_string()),
            _ => internal(&self.0),
        }
    }
}

fn not_found(message: String) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": message, "error": RESOURCE_NOT_FOUND })),
    )
        .into_response()
}

fn internal(err: &dyn std::fmt::Display) -> Response {
    error!("Internal error: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": INTERNAL_MESSAGE, "error": INTERNAL_ERROR })),
    )
        .into_response()
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
