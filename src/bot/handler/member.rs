use sea_orm::DatabaseConnection;
use serenity::all::{Context, CreateMessage, Member};

use crate::bot::embed;
use crate::service::{GuildService, NotificationService};

/// Handles the guild_member_addition event when a member joins a guild
///
/// Sends the guild's welcome message, if one is configured, as a direct message. A failed
/// delivery is logged by the notification service and otherwise ignored.
pub async fn handle_guild_member_addition(db: &DatabaseConnection, ctx: Context, new_member: Member) {
    if new_member.user.bot {
        return;
    }

    let guild_id = new_member.guild_id.get();

    let guild = match GuildService::new(db).get_settings(guild_id).await {
        Ok(guild) => guild,
        Err(e) if e.is_not_found() => {
            tracing::warn!("Received member_add event for unknown guild {}", guild_id);
            return;
        }
        Err(e) => {
            tracing::error!("Failed to load settings of guild {}: {:?}", guild_id, e);
            return;
        }
    };

    let Some((title, text)) = guild.welcome_message() else {
        return;
    };

    let message = CreateMessage::new().embed(embed::welcome(&title, &text));
    let notifier = NotificationService::new(ctx.http.clone());

    if notifier.send_dm(new_member.user.id.get(), message).await {
        tracing::debug!(
            "Sent welcome message to user {} in guild {}",
            new_member.user.id,
            guild_id
        );
    }
}
