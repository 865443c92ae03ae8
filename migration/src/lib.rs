// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

pub use sea_orm_migration::prelude::*;

mod m20250401_000001_create_filme;
mod m20250401_000002_create_kinos;
mod m20250401_000003_create_saele;
mod m20250401_000004_create_sprachen;
mod m20250401_000005_create_typen;
mod m20250402_091844_create_besuche;
mod m20250403_090312_add_unique_constraint_to_saele;
mod m20250410_000001_create_einstellungen;

/// 数据库迁移器
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    /// 获取所有迁移
    ///
    /// # 返回值
    ///
    /// 返回迁移列表，顺序与外键依赖一致
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250401_000001_create_filme::Migration),
            Box::new(m20250401_000002_create_kinos::Migration),
            Box::new(m20250401_000003_create_saele::Migration),
            Box::new(m20250401_000004_create_sprachen::Migration),
            Box::new(m20250401_000005_create_typen::Migration),
            Box::new(m20250402_091844_create_besuche::Migration),
            Box::new(m20250403_090312_add_unique_constraint_to_saele::Migration),
            Box::new(m20250410_000001_create_einstellungen::Migration),
        ]
    }
}
