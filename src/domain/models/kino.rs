// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 影院实体
///
/// 一个影院拥有多个影厅（Saal）。删除影院时其影厅一并删除，
/// 但只要任一影厅仍被观影记录引用，删除就会被拒绝。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kino {
    pub id: i32,
    pub name: String,
    /// 所在地
    pub ort: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewKino {
    pub name: String,
    pub ort: String,
}

impl Searchable for Kino {
    fn label(&self) -> &str {
        &self.name
    }
}
