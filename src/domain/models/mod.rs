// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 电影（film）：可被观看的影片
/// - 影院（kino）：放映场所，拥有多个影厅
/// - 影厅（saal）：属于某个影院的放映厅
/// - 语言（sprache）：放映语言
/// - 票种（typ）：票价类型及附加费
/// - 观影记录（besuch）：一次具体的观影
/// - 设置（einstellung）：按键寻址的键值配置
pub mod besuch;
pub mod einstellung;
pub mod film;
pub mod kino;
pub mod saal;
pub mod sprache;
pub mod typ;
