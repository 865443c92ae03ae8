// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// HTTP请求处理器模块
///
/// 每种资源一个处理器文件，处理器对仓库类型泛型，
/// 仓库实例通过 `Extension` 注入
pub mod besuch_handler;
pub mod einstellung_handler;
pub mod film_handler;
pub mod kino_handler;
pub mod saal_handler;
pub mod sprache_handler;
pub mod typ_handler;
