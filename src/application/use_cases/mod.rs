// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 包含应用程序的所有业务用例实现，每种资源一个用例。
/// 用例负责存在性与唯一性检查、模糊搜索以及把仓库错误转换为业务错误。
pub mod besuch_use_case;
pub mod einstellung_use_case;
pub mod error;
pub mod film_use_case;
pub mod kino_use_case;
pub mod listing;
pub mod saal_use_case;
pub mod sprache_use_case;
pub mod typ_use_case;
