pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_professions_table;
mod m20250301_000003_create_freelancers_table;
mod m20250301_000004_create_organizers_table;
mod m20250301_000005_create_events_table;
mod m20250301_000006_create_proposals_table;
mod m20250301_000007_create_ratings_table;
mod m20250302_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_professions_table::Migration),
            Box::new(m20250301_000003_create_freelancers_table::Migration),
            Box::new(m20250301_000004_create_organizers_table::Migration),
            Box::new(m20250301_000005_create_events_table::Migration),
            Box::new(m20250301_000006_create_proposals_table::Migration),
            Box::new(m20250301_000007_create_ratings_table::Migration),
            Box::new(m20250302_000001_add_indexes::Migration),
        ]
    }
}
