// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod besuch_api_test;
pub mod einstellung_api_test;
pub mod film_api_test;
pub mod kino_api_test;
pub mod sprache_typ_api_test;
