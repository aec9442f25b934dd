//! Guild event handlers for keeping guild rows in sync.
//!
//! `guild_create` fires on startup for every guild the bot is in, when the bot joins a
//! new guild, and when a guild becomes available again after an outage. In every case
//! the guild row is upserted. `guild_delete` removes the row only when the bot actually
//! left the guild; an outage leaves the data alone.

use sea_orm::DatabaseConnection;
use serenity::all::{Context, Guild, PartialGuild, UnavailableGuild};

use crate::service::GuildService;

/// Handles the guild_create event.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    _ctx: Context,
    guild: Guild,
    is_new: Option<bool>,
) {
    tracing::debug!(
        "Guild create event: {} ({}) - member_count: {}",
        guild.name,
        guild.id,
        guild.member_count
    );

    match GuildService::new(db).sync_guild(&guild).await {
        Ok(_) if is_new == Some(true) => {
            tracing::info!("Joined guild {} ({})", guild.name, guild.id)
        }
        Ok(_) => {}
        Err(e) => tracing::error!("Failed to upsert guild {}: {:?}", guild.id, e),
    }
}

/// Handles the guild_update event.
///
/// The event only carries a partial guild, so the full guild is read from the cache,
/// which serenity has already updated by the time handlers run.
pub async fn handle_guild_update(
    db: &DatabaseConnection,
    ctx: Context,
    _old_data_if_available: Option<Guild>,
    new_data: PartialGuild,
) {
    let Some(guild) = ctx.cache.guild(new_data.id).map(|g| g.clone()) else {
        tracing::warn!("Guild {} updated but not in cache", new_data.id);
        return;
    };

    if let Err(e) = GuildService::new(db).sync_guild(&guild).await {
        tracing::error!("Failed to update guild {}: {:?}", guild.id, e);
    }
}

/// Handles the guild_delete event.
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", incomplete.id);
        return;
    }

    if let Err(e) = GuildService::new(db).remove(incomplete.id.get()).await {
        tracing::error!("Failed to remove guild {}: {:?}", incomplete.id, e);
    }
}
