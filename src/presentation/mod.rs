// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// HTTP 处理器、路由、请求提取器和错误响应映射
pub mod errors;
pub mod extractors;
pub mod handlers;
pub mod routes;
