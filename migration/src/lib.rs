pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_taxonomy_tables;
mod m20260301_000003_create_jobs_table;
mod m20260301_000004_create_optional_fields_tables;
mod m20260301_000005_create_reviews_table;
mod m20260301_000006_create_teams_tables;
mod m20260302_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_taxonomy_tables::Migration),
            Box::new(m20260301_000003_create_jobs_table::Migration),
            Box::new(m20260301_000004_create_optional_fields_tables::Migration),
            Box::new(m20260301_000005_create_reviews_table::Migration),
            Box::new(m20260301_000006_create_teams_tables::Migration),
            Box::new(m20260302_000001_add_indexes::Migration),
        ]
    }
}
