use chrono::{Duration, Utc};
use serenity::all::{GuildId, RoleId};

use crate::bot::commands::{choice::TokenKindChoice, guild_id, reply, Context};
use crate::bot::embed;
use crate::error::AppError;
use crate::model::token::CreateTokenParam;
use crate::service::TokenService;

/// Issue and manage invite and verification codes
#[poise::command(
    slash_command,
    guild_only,
    required_permissions = "MANAGE_GUILD",
    default_member_permissions = "MANAGE_GUILD",
    subcommands("create", "revoke", "list"),
    subcommand_required
)]
pub async fn token(_ctx: Context<'_>) -> Result<(), AppError> {
    Ok(())
}

/// Issue a new code
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn create(
    ctx: Context<'_>,
    #[description = "What redeeming the code grants"] kind: TokenKindChoice,
    #[description = "How many times the code can be used (unlimited if empty)"]
    #[min = 1]
    #[max = 2147483647]
    max_uses: Option<u32>,
    #[description = "Hours until the code expires (never if empty)"]
    #[min = 1]
    #[max = 8760]
    ttl_hours: Option<u32>,
) -> Result<(), AppError> {
    let token = TokenService::new(&ctx.data().db)
        .create(CreateTokenParam {
            guild_id: guild_id(ctx)?,
            kind: kind.into(),
            created_by: ctx.author().id.get(),
            max_uses,
            ttl: ttl_hours.map(|hours| Duration::hours(i64::from(hours))),
        })
        .await?;

    reply(ctx, embed::token_created(&token)).await
}

/// Revoke a code
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn revoke(
    ctx: Context<'_>,
    #[description = "Code to revoke"] code: String,
) -> Result<(), AppError> {
    TokenService::new(&ctx.data().db)
        .revoke(guild_id(ctx)?, &code)
        .await?;

    reply(ctx, embed::success(format!("Revoked code `{}`.", code.trim()))).await
}

/// List the codes of this server
#[poise::command(slash_command, guild_only, required_permissions = "MANAGE_GUILD")]
async fn list(ctx: Context<'_>) -> Result<(), AppError> {
    let tokens = TokenService::new(&ctx.data().db)
        .list(guild_id(ctx)?)
        .await?;

    reply(ctx, embed::token_list(&tokens, Utc::now())).await
}

/// Redeem an invite or verification code
#[poise::command(slash_command, guild_only)]
pub async fn verify(
    ctx: Context<'_>,
    #[description = "The code you were given"] code: String,
) -> Result<(), AppError> {
    let guild_id = guild_id(ctx)?;
    let user_id = ctx.author().id;

    let service = TokenService::new(&ctx.data().db);
    let (token, mapping) = service.redeem(guild_id, &code).await?;

    let granted = ctx
        .http()
        .add_member_role(
            GuildId::new(guild_id),
            user_id,
            RoleId::new(mapping.role_id),
            Some("Redeemed token"),
        )
        .await;

    if let Err(e) = granted {
        tracing::warn!(
            "Failed to grant role {} to user {} in guild {}: {}",
            mapping.role_id,
            user_id,
            guild_id,
            e
        );
        service.release(&token).await?;
        return Err(e.into());
    }

    tracing::info!(
        "User {} redeemed {} token in guild {}",
        user_id,
        token.kind.as_str(),
        guild_id
    );

    reply(
        ctx,
        embed::success(format!("Code accepted. You now have <@&{}>.", mapping.role_id)),
    )
    .await
}
