//! Ready event handler for bot initialization.
//!
//! The ready event lists every guild the bot is currently in. Guild rows for guilds the
//! bot was removed from while offline are deleted here, taking their queues, sessions,
//! role mappings and tokens with them.

use sea_orm::DatabaseConnection;
use serenity::all::{ActivityData, Context, Ready};

use crate::service::GuildService;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `db` - Database connection for reconciling guild rows
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing the bot user and its guild list
pub async fn handle_ready(db: &DatabaseConnection, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::watching("the queues")));

    let joined: Vec<u64> = ready.guilds.iter().map(|g| g.id.get()).collect();

    if let Err(e) = GuildService::new(db).reconcile(&joined).await {
        tracing::error!("Failed to reconcile guilds: {:?}", e);
    }
}
