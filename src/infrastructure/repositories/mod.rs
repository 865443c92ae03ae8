// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库实现模块
///
/// 提供领域仓库接口基于 SeaORM 的具体实现
pub mod besuch_repo_impl;
pub mod einstellung_repo_impl;
pub mod film_repo_impl;
pub mod kino_repo_impl;
pub mod saal_repo_impl;
pub mod sprache_repo_impl;
pub mod typ_repo_impl;
