use sea_orm_migration::prelude::*;

mod m20260802_000001_create_catalog;
mod m20260802_000002_create_variants;
mod m20260802_000003_create_carts;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260802_000001_create_catalog::Migration),
            Box::new(m20260802_000002_create_variants::Migration),
            Box::new(m20260802_000003_create_carts::Migration),
        ]
    }
}
