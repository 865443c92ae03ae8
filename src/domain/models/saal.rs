// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 影厅实体
///
/// `(name, kino_id)` 在同一影院内唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saal {
    pub id: i32,
    pub name: String,
    /// 所属影院ID
    pub kino_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSaal {
    pub name: String,
    pub kino_id: i32,
}
