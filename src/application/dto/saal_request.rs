// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// 创建影厅请求
///
/// `kino_id` 的存在性和 `(name, kino_id)` 的唯一性在用例中检查
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateSaalDto {
    #[validate(
        required(message = "Das Feld name ist erforderlich."),
        length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein.")
    )]
    pub name: Option<String>,
    #[validate(required(message = "Das Feld kino_id ist erforderlich."))]
    pub kino_id: Option<i32>,
}

/// 更新影厅请求
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSaalDto {
    #[validate(length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein."))]
    pub name: Option<String>,
    pub kino_id: Option<i32>,
}
