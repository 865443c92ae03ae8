// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::list_query::ListQuery;
use crate::domain::search::{list_or_search, Searchable};
use crate::infrastructure::metrics;
use tracing::debug;

/// 可搜索列表端点的共用流程：缺少搜索词时按顺序截取，否则模糊搜索
pub fn list_records<T: Searchable>(
    resource: &'static str,
    query: &ListQuery,
    records: Vec<T>,
) -> Vec<T> {
    let term = query.term();
    let limit = query.limit();
    let total = records.len();

    let results = list_or_search(term, records, limit);

    metrics::record_list_request(resource, term.is_some());
    if let Some(term) = term {
        metrics::record_search_results(resource, results.len());
        debug!(
            "Search {} for '{}' matched {} of {} (limit {})",
            resource,
            term,
            results.len(),
            total,
            limit
        );
    }

    results
}
