// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 仓库接口模块
///
/// 该模块定义了领域层的仓库接口，遵循依赖倒置原则。
/// 仓库接口定义了数据持久化的抽象契约，具体实现由基础设施层提供。
///
/// 包含的仓库接口：
/// - 电影仓库（film_repository）
/// - 影院仓库（kino_repository）：含连同影厅一起删除
/// - 影厅仓库（saal_repository）：含同一影院内名称唯一性检查
/// - 语言仓库（sprache_repository）
/// - 票种仓库（typ_repository）
/// - 观影记录仓库（besuch_repository）
/// - 设置仓库（einstellung_repository）：按键寻址
pub mod besuch_repository;
pub mod einstellung_repository;
pub mod error;
pub mod film_repository;
pub mod kino_repository;
pub mod saal_repository;
pub mod sprache_repository;
pub mod typ_repository;

pub use error::RepositoryError;
