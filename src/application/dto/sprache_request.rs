// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateSpracheDto {
    #[validate(
        required(message = "Das Feld name ist erforderlich."),
        length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein.")
    )]
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateSpracheDto {
    #[validate(length(min = 1, max = 255, message = "Das Feld name muss zwischen 1 und 255 Zeichen lang sein."))]
    pub name: Option<String>,
}
