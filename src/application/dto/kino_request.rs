// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// 创建影院请求
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateKinoDto {
    #[validate(
        required(message = "Das Feld name ist erforderlich."),
        length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "Das Feld ort ist erforderlich."),
        length(min = 1, max = 255, message = "Das Feld ort muss zwischen 1 und 255 Zeichen lang sein.")
    )]
    pub ort: Option<String>,
}

/// 更新影院请求
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateKinoDto {
    #[validate(length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein."))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Das Feld ort muss zwischen 1 und 255 Zeichen lang sein."))]
    pub ort: Option<String>,
}
