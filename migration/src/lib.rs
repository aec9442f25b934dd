pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_discord_guild_table;
mod m20260301_000002_create_queue_table;
mod m20260301_000003_create_queue_session_table;
mod m20260302_000004_create_guild_role_table;
mod m20260302_000005_create_guild_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_discord_guild_table::Migration),
            Box::new(m20260301_000002_create_queue_table::Migration),
            Box::new(m20260301_000003_create_queue_session_table::Migration),
            Box::new(m20260302_000004_create_guild_role_table::Migration),
            Box::new(m20260302_000005_create_guild_token_table::Migration),
        ]
    }
}
