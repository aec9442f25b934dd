use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, Member, PartialGuild, Ready, UnavailableGuild};
use serenity::async_trait;

pub mod guild;
pub mod member;
pub mod ready;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
}

impl Handler {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl serenity::all::EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.db, ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(&self.db, ctx, guild, is_new).await;
    }

    /// Called when a guild's name or settings change
    async fn guild_update(
        &self,
        ctx: Context,
        old_data_if_available: Option<Guild>,
        new_data: PartialGuild,
    ) {
        guild::handle_guild_update(&self.db, ctx, old_data_if_available, new_data).await;
    }

    /// Called when the bot is removed from a guild or the guild becomes unavailable
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(&self.db, ctx, incomplete, full).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(&self.db, ctx, new_member).await;
    }
}
