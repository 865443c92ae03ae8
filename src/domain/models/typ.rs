// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 票种实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typ {
    pub id: i32,
    pub name: String,
    /// 附加费（瑞士法郎），精确到分
    pub zuschlag_chf: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewTyp {
    pub name: String,
    pub zuschlag_chf: f64,
}

impl Searchable for Typ {
    fn label(&self) -> &str {
        &self.name
    }
}

/// 将金额四舍五入到分
pub fn round_chf(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
