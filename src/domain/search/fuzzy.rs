// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 列表端点共用的模糊搜索
//!
//! 电影、影院、语言和票种的列表端点都通过这里按标签字段搜索。
//! 纯函数：不做 I/O，不持有共享状态，可在多个请求任务中并发调用。

/// 未指定 `limit` 时返回的最大条数
pub const DEFAULT_LIMIT: usize = 10;

/// `limit` 参数允许的最大值
pub const MAX_LIMIT: usize = 100;

/// 搜索词允许的最大长度
pub const MAX_QUERY_LENGTH: u64 = 255;

/// 标签以搜索词开头时从距离中扣除的分值
pub const PREFIX_BONUS: i64 = 5;

/// 可被模糊搜索的记录
///
/// `label` 返回参与匹配和排序的文本字段
pub trait Searchable {
    fn label(&self) -> &str;
}

/// 按 `Searchable::label` 搜索
pub fn search<T: Searchable>(term: &str, candidates: Vec<T>, limit: usize) -> Vec<T> {
    search_by(term, candidates, limit, |candidate| candidate.label())
}

/// 通用模糊搜索
///
/// 1. 标签与搜索词都转为小写（搜索词先去除首尾空白）
/// 2. 只保留标签包含搜索词的候选
/// 3. 以 Levenshtein 距离评分，标签以搜索词开头时减去 [`PREFIX_BONUS`]
/// 4. 按分数升序稳定排序，同分保持输入顺序
/// 5. 截断到 `limit` 条，`limit` 为 0 时返回空结果
///
/// 返回的是原始记录本身，评分只存在于本函数的局部向量中。
pub fn search_by<T, F>(term: &str, candidates: Vec<T>, limit: usize, label: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    if limit == 0 {
        return Vec::new();
    }

    let term = term.trim().to_lowercase();

    let mut scored: Vec<(i64, T)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let folded = label(&candidate).to_lowercase();
            if !folded.contains(term.as_str()) {
                return None;
            }

            let mut distance = strsim::levenshtein(&folded, &term) as i64;
            if folded.starts_with(term.as_str()) {
                distance -= PREFIX_BONUS;
            }

            Some((distance, candidate))
        })
        .collect();

    // sort_by_key 是稳定排序
    scored.sort_by_key(|(distance, _)| *distance);
    scored.truncate(limit);

    scored.into_iter().map(|(_, candidate)| candidate).collect()
}

/// 列表端点的调用规则
///
/// 搜索词缺失或去除空白后为空时，按读取顺序返回前 `limit` 条；
/// 否则执行模糊搜索。
pub fn list_or_search<T: Searchable>(
    query: Option<&str>,
    candidates: Vec<T>,
    limit: usize,
) -> Vec<T> {
    match query.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => search(term, candidates, limit),
        None => candidates.into_iter().take(limit).collect(),
    }
}
