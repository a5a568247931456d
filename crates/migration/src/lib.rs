//! Migrator for the job board schema.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240601_000001_create_job;
mod m20240601_000002_add_job_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240601_000001_create_job::Migration),
            // Indexes should always be applied last
            Box::new(m20240601_000002_add_job_indexes::Migration),
        ]
    }
}
