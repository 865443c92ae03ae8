// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 请求提取器模块
///
/// 提供从HTTP请求中提取数据的工具
/// 用于解析和验证请求中的参数和数据
pub mod validated;

pub use validated::{ValidatedJson, ValidatedQuery};
