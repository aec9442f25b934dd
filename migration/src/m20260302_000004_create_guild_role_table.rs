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
                    .table(GuildRole::Table)
                    .if_not_exists()
                    .col(pk_auto(GuildRole::Id))
                    .col(string(GuildRole::GuildId))
                    .col(string(GuildRole::Kind))
                    .col(string(GuildRole::RoleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_guild_role_guild_id")
                            .from(GuildRole::Table, GuildRole::GuildId)
                            .to(DiscordGuild::Table, DiscordGuild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One mapped role per kind per guild
        manager
            .create_index(
                Index::create()
                    .name("idx_guild_role_kind_unique")
                    .table(GuildRole::Table)
                    .col(GuildRole::GuildId)
                    .col(GuildRole::Kind)
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
                    .name("idx_guild_role_kind_unique")
                    .table(GuildRole::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GuildRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GuildRole {
    Table,
    Id,
    GuildId,
    Kind,
    RoleId,
}
