// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 键值设置
///
/// 对外按 `key` 寻址，`key` 全局唯一。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Einstellung {
    pub id: i32,
    pub key: String,
    pub value: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEinstellung {
    pub key: String,
    pub value: String,
    pub description: Option<String>,
}
