// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 电影实体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    /// 电影ID
    pub id: i32,
    /// 片名，模糊搜索的匹配字段
    pub filmtitel: String,
    /// 海报地址
    pub bild_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 待创建的电影
#[derive(Debug, Clone)]
pub struct NewFilm {
    pub filmtitel: String,
    pub bild_url: String,
}

impl Searchable for Film {
    fn label(&self) -> &str {
        &self.filmtitel
    }
}
