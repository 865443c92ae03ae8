// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

/// 仓库错误
///
/// 约束冲突从底层数据库错误中识别出来，便于上层转换为 409 响应
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
    /// 外键约束冲突
    #[error("Foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),
    /// 唯一约束冲突
    #[error("Unique constraint violation: {0}")]
    UniqueViolation(String),
}

impl From<DbErr> for RepositoryError {
    fn from(err: DbErr) -> Self {
        match err.sql_err() {
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
                RepositoryError::ForeignKeyViolation(detail)
            }
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                RepositoryError::UniqueViolation(detail)
            }
            _ => match err {
                DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => RepositoryError::NotFound,
                other => classify_by_message(other),
            },
        }
    }
}

/// 驱动未提供错误码时按错误文本识别约束冲突
fn classify_by_message(err: DbErr) -> RepositoryError {
    let text = err.to_string().to_lowercase();
    if text.contains("foreign key constraint") {
        RepositoryError::ForeignKeyViolation(text)
    } else if text.contains("unique constraint") {
        RepositoryError::UniqueViolation(text)
    } else {
        RepositoryError::Database(err)
    }
}
