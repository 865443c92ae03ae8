// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// 创建设置请求
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateEinstellungDto {
    #[validate(
        required(message = "Das Feld key ist erforderlich."),
        length(min = 1, max = 255, message = "Das Feld key muss zwischen 1 und 255 Zeichen lang sein.")
    )]
    pub key: Option<String>,
    #[validate(required(message = "Das Feld value ist erforderlich."))]
    pub value: Option<String>,
    pub description: Option<String>,
}

/// 更新设置请求
///
/// `value` 必填；`description` 仅在提供非空值时替换
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateEinstellungDto {
    #[validate(required(message = "Das Feld value ist erforderlich."))]
    pub value: Option<String>,
    pub description: Option<String>,
}
