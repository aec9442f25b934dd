use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_discord_guild_table::DiscordGuild,
    m20260301_000002_create_queue_table::Queue,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(QueueSession::Table)
                    .if_not_exists()
                    .col(pk_auto(QueueSession::Id))
                    .col(string(QueueSession::GuildId))
                    .col(integer(QueueSession::QueueId))
                    .col(string(QueueSession::UserId))
                    .col(
                        timestamp_with_time_zone(QueueSession::StartedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(QueueSession::EndedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_queue_session_guild_id")
                            .from(QueueSession::Table, QueueSession::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_queue_session_queue_id")
                            .from(QueueSession::Table, QueueSession::QueueId)
                            .to(Queue::Table, Queue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Termination filters on (guild_id, user_id) with ended_at IS NULL
        manager
            .create_index(
                Index::create()
                    .name("idx_queue_session_guild_user")
                    .table(QueueSession::Table)
                    .col(QueueSession::GuildId)
                    .col(QueueSession::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_queue_session_guild_user")
                    .table(QueueSession::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(QueueSession::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum QueueSession {
    Table,
    Id,
    GuildId,
    QueueId,
    UserId,
    StartedAt,
    EndedAt,
}
