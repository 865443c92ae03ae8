// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// 观影记录实体
///
/// 记录一次观影：时间段、座位、字幕以及小吃附加费。
/// 通过四个外键分别引用电影、票种、语言和影厅，
/// 对外响应只暴露扁平的外键ID，不嵌套关联对象。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Besuch {
    /// 观影记录ID
    pub id: i32,
    /// 开始时间
    pub anfang: NaiveDateTime,
    /// 结束时间
    pub ende: NaiveDateTime,
    /// 排号，单个字符
    pub reihe: String,
    /// 座位号，1..=255
    pub platz: i16,
    /// 是否带字幕
    pub untertitel: bool,
    /// 小吃附加费（瑞士法郎）
    pub snackzuschlag_chf: Option<f64>,
    pub film_id: i32,
    pub typ_id: i32,
    pub sprache_id: i32,
    pub saal_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待创建的观影记录
#[derive(Debug, Clone)]
pub struct NewBesuch {
    pub anfang: NaiveDateTime,
    pub ende: NaiveDateTime,
    pub reihe: String,
    pub platz: i16,
    pub untertitel: bool,
    pub snackzuschlag_chf: Option<f64>,
    pub film_id: i32,
    pub typ_id: i32,
    pub sprache_id: i32,
    pub saal_id: i32,
}
