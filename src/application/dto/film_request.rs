// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

/// 创建电影请求
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateFilmDto {
    #[validate(
        required(message = "Das Feld filmtitel ist erforderlich."),
        length(min = 1, max = 255, message = "Das Feld filmtitel muss zwischen 1 und 255 Zeichen lang sein.")
    )]
    pub filmtitel: Option<String>,
    #[validate(
        required(message = "Das Feld bild_url ist erforderlich."),
        url(message = "Das Feld bild_url muss eine gültige URL sein.")
    )]
    pub bild_url: Option<String>,
}

/// 更新电影请求，只修改提供的字段
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateFilmDto {
    #[validate(length(min = 1, max = 255, message = "Das Feld filmtitel muss zwischen 1 und 255 Zeichen lang sein."))]
    pub filmtitel: Option<String>,
    #[validate(url(message = "Das Feld bild_url muss eine gültige URL sein."))]
    pub bild_url: Option<String>,
}
