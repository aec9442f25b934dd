use serenity::all::Role;

use crate::bot::commands::{choice::RoleKindChoice, guild_id, reply, Context};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::role::RoleKind;
use crate::service::RoleMappingService;

/// Configure which Discord roles the bot uses
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    default_member_permissions = "MANAGE_GUILD",
    subcommands("set", "remove", "list"),
    subcommand_required
)]
pub async fn roles(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Map a Discord role to a purpose
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn set(
    ctx: Context<'_>,
    #[description = "What the role is used for"] kind: RoleKindChoice,
    #[description = "Discord role"] role: Role,
) -> Result<(), AppError> {
    let kind = RoleKind::from(kind);

    RoleMappingService::new(&ctx.data().db)
        .set(guild_id(ctx)?, kind, role.id.get())
        .await?;

    reply(
        ctx,
        embed::success(format!("{} role set to <@&{}>.", kind, role.id)),
    )
    .await
}

/// Remove a role mapping
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn remove(
    ctx: Context<'_>,
    #[description = "Mapping to remove"] kind: RoleKindChoice,
) -> Result<(), AppError> {
    let kind = RoleKind::from(kind);

    RoleMappingService::new(&ctx.data().db)
        .remove(guild_id(ctx)?, kind)
        .await?;

    reply(ctx, embed::success(format!("{} role mapping removed.", kind))).await
}

/// Show the role mappings of this server
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    let mappings = RoleMappingService::new(&ctx.data().db)
        .list(guild_id(ctx)?)
        .await?;

    reply(ctx, embed::role_mappings(&mappings)).await
}
