//! Migrator registering the course-module schema in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_visits;
mod m20240901_000002_create_modules;
mod m20240901_000003_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_visits::Migration),
            Box::new(m20240901_000002_create_modules::Migration),
            // Indexes should always be applied last
            Box::new(m20240901_000003_add_indexes::Migration),
        ]
    }
}
