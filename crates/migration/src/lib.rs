//! Migrator registering entity-specific migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_suino;
mod m20240101_000002_create_saude;
mod m20240101_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_suino::Migration),
            Box::new(m20240101_000002_create_saude::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000003_add_indexes::Migration),
        ]
    }
}
