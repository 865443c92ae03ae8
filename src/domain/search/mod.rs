// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 模糊搜索模块
///
/// 子串过滤 + 编辑距离排序，前缀匹配额外加权，结果按上限截断
pub mod fuzzy;

pub use fuzzy::{
    list_or_search, search, search_by, Searchable, DEFAULT_LIMIT, MAX_LIMIT, MAX_QUERY_LENGTH,
    PREFIX_BONUS,
};
