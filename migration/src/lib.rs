pub use sea_orm_migration::prelude::*;

pub mod entities;
mod m20261015_000001_urls_table;
mod m20261015_000002_todos_table;

/// URL 短链服务的 schema（`urls` 表）
pub struct ShortUrlMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ShortUrlMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261015_000001_urls_table::Migration)]
    }
}

/// TODO 服务的 schema（`todos` 表）
pub struct TodoMigrator;

#[async_trait::async_trait]
impl MigratorTrait for TodoMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20261015_000002_todos_table::Migration)]
    }
}
