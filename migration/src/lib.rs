pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_scientist_table;
mod m20240101_000002_create_planet_table;
mod m20240101_000003_create_mission_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_scientist_table::Migration),
            Box::new(m20240101_000002_create_planet_table::Migration),
            Box::new(m20240101_000003_create_mission_table::Migration),
        ]
    }
}
