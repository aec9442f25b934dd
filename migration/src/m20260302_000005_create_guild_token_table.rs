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
                    .table(GuildToken::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildToken::Id))
                    .col(string(GuildToken::GuildId))
                    .col(string_uniq(GuildToken::Code))
                    .col(string(GuildToken::Kind))
                    .col(string(GuildToken::CreatedBy))
                    .col(integer_null(GuildToken::MaxUses))
                    .col(integer(GuildToken::Uses).default(0))
                    .col(timestamp_with_time_zone_null(GuildToken::ExpiresAt))
                    .col(
                        timestamp_with_time_zone(GuildToken::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_token_guild_id")
                            .from(GuildToken::Table, GuildToken::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GuildToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildToken {
    Table,
    Id,
    GuildId,
    Code,
    Kind,
    CreatedBy,
    MaxUses,
    Uses,
    ExpiresAt,
    CreatedAt,
}
