use crate::bot::commands::{guild_id, reply, Context};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::queue::CreateQueueParam;
use crate::service::{QueueService, QueueStateService};

/// Create, browse and join queues
#[poise::command(
    slash_command,
    guild_only,
    subcommands("create", "delete", "list", "join", "leave", "summary"),
    subcommand_required
)]
pub async fn queue(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Create a new queue
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    default_member_permissions = "MANAGE_GUILD"
)]
async fn create(
    ctx: Context<'_>,
    #[description = "Queue name, unique in this server"]
    #[max_length = 64]
    name: String,
    #[description = "What the queue is for"] description: Option<String>,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    let queue = QueueService::new(&ctx.data().db)
        .create(CreateQueueParam {
            guild_id,
            name,
            description,
        })
        .await?;

    reply(ctx, embed::success(format!("Created queue **{}**.", queue.name))).await
}

/// Delete a queue and end all of its sessions
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    default_member_permissions = "MANAGE_GUILD"
)]
async fn delete(
    ctx: Context<'_>,
    #[description = "Queue name"] name: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    QueueService::new(&ctx.data().db)
        .delete(guild_id, &name)
        .await?;

    reply(ctx, embed::success(format!("Deleted queue **{}**.", name))).await
}

/// List the queues of this server
#[poise::command(slash_command, guild_only)]
async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    let queues = QueueService::new(&ctx.data().db).list(guild_id).await?;

    reply(ctx, embed::queue_list(&queues)).await
}

/// Join a queue
#[poise::command(slash_command, guild_only)]
async fn join(
    ctx: Context<'_>,
    #[description = "Queue name"] name: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    QueueService::new(&ctx.data().db)
        .join(guild_id, &name, ctx.author().id.get())
        .await?;

    reply(ctx, embed::success(format!("You joined queue **{}**.", name))).await
}

/// Leave a queue
#[poise::command(slash_command, guild_only)]
async fn leave(
    ctx: Context<'_>,
    #[description = "Queue name"] name: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    QueueService::new(&ctx.data().db)
        .leave(guild_id, &name, ctx.author().id.get())
        .await?;

    reply(ctx, embed::success(format!("You left queue **{}**.", name))).await
}

/// Show the state of a queue
#[poise::command(slash_command, guild_only)]
async fn summary(
    ctx: Context<'_>,
    #[description = "Queue name"] name: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;

    let summary = QueueStateService::new(&ctx.data().db)
        .get_queue_summary(guild_id, &name)
        .await?;

    reply(ctx, embed::queue_summary(&summary)).await
}
