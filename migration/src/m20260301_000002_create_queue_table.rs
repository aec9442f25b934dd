use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_discord_guild_table::DiscordGuild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Queue::Table)
                    .if_not_exists()
                    .col(pk_auto(Queue::Id))
                    .col(string(Queue::GuildId))
                    .col(string(Queue::Name))
                    .col(text_null(Queue::Description))
                    .col(boolean(Queue::Locked).default(false))
                    .col(boolean(Queue::ScheduleEnabled).default(false))
                    .col(
                        timestamp_with_time_zone(Queue::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Queue::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_queue_guild_id")
                            .from(Queue::Table, Queue::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Queue names are unique per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_queue_guild_name_unique")
                    .table(Queue::Table)
                    .col(Queue::GuildId)
                    .col(Queue::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_queue_guild_name_unique")
                    .table(Queue::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Queue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Queue {
    Table,
    Id,
    GuildId,
    Name,
    Description,
    Locked,
    ScheduleEnabled,
    CreatedAt,
    UpdatedAt,
}
