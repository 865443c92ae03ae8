// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 观影时间的解析
//!
//! 接受 RFC 3339（带时区时保留其本地时间）、`YYYY-MM-DDTHH:MM:SS`
//! 和 `YYYY-MM-DD HH:MM:SS`，秒后的小数部分可选；
//! 另外接受 HTML `datetime-local` 输入的 `YYYY-MM-DDTHH:MM`。

use chrono::{DateTime, NaiveDateTime};
use validator::ValidationError;

const FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// 解析日期时间字符串，无法识别时返回 `None`
pub fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// `validator` 自定义校验函数
pub fn validate_date_time(value: &str) -> Result<(), ValidationError> {
    match parse_date_time(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("date")),
    }
}
