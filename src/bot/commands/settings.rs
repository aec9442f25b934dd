use crate::bot::commands::{guild_id, reply, Context};
use crate::bot::embed;
use crate::error::AppError;
use crate::service::GuildService;

/// View and change server settings
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    default_member_permissions = "MANAGE_GUILD",
    subcommands("show", "welcome", "clear_welcome"),
    subcommand_required
)]
pub async fn settings(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Show the settings of this server
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn show(ctx: Context<'_>) -> Result<(), AppError> {
    let guild = GuildService::new(&ctx.data().db)
        .get_settings(guild_id(ctx)?)
        .await?;

    reply(ctx, embed::guild_settings(&guild)).await
}

/// Set the message sent to new members
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn welcome(
    ctx: Context<'_>,
    #[description = "Message text"]
    #[max_length = 2000]
    text: String,
    #[description = "Message title, defaults to \"Welcome to <server>\""]
    #[max_length = 256]
    title: Option<String>,
) -> Result<(), AppError> {
    let guild = GuildService::new(&ctx.data().db)
        .set_welcome(guild_id(ctx)?, title, text)
        .await?;

    reply(ctx, embed::guild_settings(&guild)).await
}

/// Stop sending a message to new members
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    rename = "clear-welcome"
)]
async fn clear_welcome(ctx: Context<'_>) -> Result<(), AppError> {
    GuildService::new(&ctx.data().db)
        .clear_welcome(guild_id(ctx)?)
        .await?;

    reply(ctx, embed::success("Welcome message cleared.")).await
}
