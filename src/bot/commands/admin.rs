//! Queue administration: locking, scheduling and session termination.

use serenity::all::User;

use crate::bot::commands::{guild_id, reply, Context};
use crate::bot::embed;
use crate::error::AppError;
use crate::service::QueueStateService;

/// Administer queues and sessions
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    default_member_permissions = "MANAGE_GUILD",
    subcommands("lock", "unlock", "schedule", "terminate_all", "terminate_user"),
    subcommand_required
)]
pub async fn admin(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Lock a queue; its schedule is disabled as well
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn lock(
    ctx: Context<'_>,
    #[description = "Queue name"] name: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let service = QueueStateService::new(&ctx.data().db);

    service.set_queue_lock_state(guild_id, &name, true).await?;
    let summary = service.get_queue_summary(guild_id, &name).await?;

    reply(ctx, embed::queue_summary(&summary)).await
}

/// Unlock a queue
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn unlock(
    ctx: Context<'_>,
    #[description = "Queue name"] name: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let service = QueueStateService::new(&ctx.data().db);

    service.set_queue_lock_state(guild_id, &name, false).await?;
    let summary = service.get_queue_summary(guild_id, &name).await?;

    reply(ctx, embed::queue_summary(&summary)).await
}

/// Enable or disable the schedule of a queue
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn schedule(
    ctx: Context<'_>,
    #[description = "Queue name"] name: String,
    #[description = "Whether the schedule runs"] enabled: bool,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let service = QueueStateService::new(&ctx.data().db);

    service.set_schedule_enabled(guild_id, &name, enabled).await?;
    let summary = service.get_queue_summary(guild_id, &name).await?;

    reply(ctx, embed::queue_summary(&summary)).await
}

/// End every active session in this server
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    rename = "terminate-all"
)]
async fn terminate_all(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    let ended = QueueStateService::new(&ctx.data().db)
        .terminate_all_sessions(guild_id)
        .await?;

    reply(ctx, embed::success(sessions_ended(ended))).await
}

/// End every active session of one member
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    rename = "terminate-user"
)]
async fn terminate_user(
    ctx: Context<'_>,
    #[description = "Member whose sessions to end"] user: User,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    let ended = QueueStateService::new(&ctx.data().db)
        .terminate_sessions_by_user(guild_id, user.id.get())
        .await?;

    reply(
        ctx,
        embed::success(format!("{} for <@{}>.", sessions_ended(ended), user.id)),
    )
    .await
}

fn sessions_ended(count: u64) -> String {
    match count {
        0 => "No active sessions to end".to_string(),
        1 => "Ended 1 session".to_string(),
        n => format!("Ended {} sessions", n),
    }
}
