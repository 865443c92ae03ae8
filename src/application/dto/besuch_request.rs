// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::date_time::validate_date_time;
use serde::Deserialize;
use validator::Validate;

/// 创建观影记录请求
///
/// 四个外键的存在性在用例中检查，缺失时同样以字段错误返回。
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateBesuchDto {
    #[validate(
        required(message = "Das Feld anfang ist erforderlich."),
        custom(function = "validate_date_time", message = "Das Feld anfang muss ein gültiges Datum sein.")
    )]
    pub anfang: Option<String>,
    #[validate(
        required(message = "Das Feld ende ist erforderlich."),
        custom(function = "validate_date_time", message = "Das Feld ende muss ein gültiges Datum sein.")
    )]
    pub ende: Option<String>,
    #[validate(
        required(message = "Das Feld reihe ist erforderlich."),
        length(equal = 1, message = "Das Feld reihe muss genau 1 Zeichen lang sein.")
    )]
    pub reihe: Option<String>,
    #[validate(
        required(message = "Das Feld platz ist erforderlich."),
        range(min = 1, max = 255, message = "Das Feld platz muss zwischen 1 und 255 liegen.")
    )]
    pub platz: Option<i64>,
    #[validate(required(message = "Das Feld untertitel ist erforderlich."))]
    pub untertitel: Option<bool>,
    #[validate(range(min = 0.0, max = 999.99, message = "Das Feld snackzuschlag_chf muss zwischen 0 und 999.99 liegen."))]
    pub snackzuschlag_chf: Option<f64>,
    #[validate(required(message = "Das Feld film_id ist erforderlich."))]
    pub film_id: Option<i32>,
    #[validate(required(message = "Das Feld typ_id ist erforderlich."))]
    pub typ_id: Option<i32>,
    #[validate(required(message = "Das Feld sprache_id ist erforderlich."))]
    pub sprache_id: Option<i32>,
    #[validate(required(message = "Das Feld saal_id ist erforderlich."))]
    pub saal_id: Option<i32>,
}

/// 更新观影记录请求，只修改提供的字段
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateBesuchDto {
    #[validate(custom(function = "validate_date_time", message = "Das Feld anfang muss ein gültiges Datum sein."))]
    pub anfang: Option<String>,
    #[validate(custom(function = "validate_date_time", message = "Das Feld ende muss ein gültiges Datum sein."))]
    pub ende: Option<String>,
    #[validate(length(equal = 1, message = "Das Feld reihe muss genau 1 Zeichen lang sein."))]
    pub reihe: Option<String>,
    #[validate(range(min = 1, max = 255, message = "Das Feld platz muss zwischen 1 und 255 liegen."))]
    pub platz: Option<i64>,
    pub untertitel: Option<bool>,
    #[validate(range(min = 0.0, max = 999.99, message = "Das Feld snackzuschlag_chf muss zwischen 0 und 999.99 liegen."))]
    pub snackzuschlag_chf: Option<f64>,
    pub film_id: Option<i32>,
    pub typ_id: Option<i32>,
    pub sprache_id: Option<i32>,
    pub saal_id: Option<i32>,
}
