// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据传输对象模块
///
/// 定义应用程序层的数据传输对象，用于在 API 请求和领域模型之间传输数据。
/// 校验规则通过 `validator` 派生宏声明，错误消息为德语。
pub mod besuch_request;
pub mod date_time;
pub mod einstellung_request;
pub mod film_request;
pub mod kino_request;
pub mod list_query;
pub mod saal_request;
pub mod sprache_request;
pub mod typ_request;
