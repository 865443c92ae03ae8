// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::{DEFAULT_LIMIT, MAX_LIMIT};
use serde::Deserialize;
use validator::Validate;

/// 列表端点的查询参数
///
/// `query`（别名 `q`）为搜索词，`limit` 为返回条数上限
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListQuery {
    #[serde(alias = "q")]
    #[validate(length(max = 255, message = "Das Feld query darf maximal 255 Zeichen haben."))]
    pub query: Option<String>,
    #[validate(range(min = 1, max = 100, message = "Das Feld limit muss zwischen 1 und 100 liegen."))]
    pub limit: Option<u32>,
}

impl ListQuery {
    /// 去除空白后非空的搜索词
    pub fn term(&self) -> Option<&str> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }

    /// 生效的条数上限，缺省为 [`DEFAULT_LIMIT`]
    pub fn limit(&self) -> usize {
        self.limit
            .map(|limit| (limit as usize).min(MAX_LIMIT))
            .unwrap_or(DEFAULT_LIMIT)
    }
}
