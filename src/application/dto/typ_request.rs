// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// 创建票种请求
///
/// `zuschlag_chf` 缺省为 0.00
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateTypDto {
    #[validate(
        required(message = "Das Feld name ist erforderlich."),
        length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein.")
    )]
    pub name: Option<String>,
    #[validate(range(min = 0.0, max = 999.99, message = "Das Feld zuschlag_chf muss zwischen 0 und 999.99 liegen."))]
    pub zuschlag_chf: Option<f64>,
}

/// 更新票种请求
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTypDto {
    #[validate(length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein."))]
    pub name: Option<String>,
    #[validate(range(min = 0.0, max = 999.99, message = "Das Feld zuschlag_chf muss zwischen 0 und 999.99 liegen."))]
    pub zuschlag_chf: Option<f64>,
}
