// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::search::Searchable;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 放映语言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprache {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewSprache {
    pub name: String,
}

impl Searchable for Sprache {
    fn label(&self) -> &str {
        &self.name
    }
}
