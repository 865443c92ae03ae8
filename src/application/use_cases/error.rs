// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::repositories::RepositoryError;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

pub const RESOURCE_NOT_FOUND: &str = "resource_not_found";
pub const FOREIGN_KEY_CONSTRAINT_VIOLATION: &str = "foreign_key_constraint_violation";
pub const UNIQUE_CONSTRAINT_VIOLATION: &str = "unique_constraint_violation";
pub const INTERNAL_ERROR: &str = "internal_error";

/// 字段名到错误消息列表的映射，按字段名排序以保证响应稳定
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// 用例错误
#[derive(Error, Debug)]
pub enum ServiceError {
    /// 请求数据校验失败
    #[error("Die angegebenen Daten sind ungültig.")]
    Validation(FieldErrors),
    /// 资源不存在，携带资源的德语名称
    #[error("{0} nicht gefunden.")]
    NotFound(&'static str),
    /// 约束冲突
    #[error("{message}")]
    Conflict { code: &'static str, message: String },
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

impl ServiceError {
    /// 单个字段的校验错误
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        ServiceError::Validation(errors)
    }

    pub fn conflict(code: &'static str, message: impl Into<String>) -> Self {
        ServiceError::Conflict {
            code,
            message: message.into(),
        }
    }
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("Das Feld {} ist ungültig.", field),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        ServiceError::Validation(fields)
    }
}

/// 取出已通过校验的必填字段
///
/// 校验通过后不会为 `None`，这里仍返回字段错误而不是 panic
pub fn require<T>(field: &str, value: Option<T>) -> Result<T, ServiceError> {
    value.ok_or_else(|| ServiceError::field(field, format!("Das Feld {} ist erforderlich.", field)))
}
