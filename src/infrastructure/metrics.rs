// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::{info, warn};

pub const LIST_REQUESTS_TOTAL: &str = "kino_list_requests_total";
pub const SEARCH_RESULTS: &str = "kino_search_results";

/// 初始化指标系统
///
/// 未启用或安装失败时只记录日志，服务照常运行；
/// 此时 `metrics` 宏退化为空操作。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            warn!(
                "Invalid metrics listen address {}: {}",
                settings.listen_addr, e
            );
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        warn!(
            "Failed to install Prometheus recorder: {}. This might happen if the port is already in use.",
            e
        );
        return;
    }

    describe_counter!(
        LIST_REQUESTS_TOTAL,
        "Total number of list requests by resource and mode (list or search)"
    );
    describe_histogram!(
        SEARCH_RESULTS,
        "Number of records returned by fuzzy search"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次列表请求
pub fn record_list_request(resource: &'static str, searched: bool) {
    let mode = if searched { "search" } else { "list" };
    counter!(LIST_REQUESTS_TOTAL, "resource" => resource, "mode" => mode).increment(1);
}

/// 记录一次模糊搜索返回的条数
pub fn record_search_results(resource: &'static str, count: usize) {
    histogram!(SEARCH_RESULTS, "resource" => resource).record(count as f64);
}
