//! Slash commands.
//!
//! Commands are thin: they read their options, call one service, and reply with an
//! ephemeral embed from `bot::embed`. Errors are returned to the framework and rendered
//! by `error::on_error`.

pub mod admin;
pub mod choice;
pub mod error;
pub mod queue;
pub mod roles;
pub mod settings;
pub mod token;

use poise::CreateReply;
use serenity::all::CreateEmbed;

use crate::bot::start::Data;
use crate::error::AppError;

pub type Context<'a> = poise::Context<'a, Data, AppError>;

/// Every top-level command the bot registers.
pub fn all() -> Vec<poise::Command<Data, AppError>> {
    vec![
        queue::queue(),
        admin::admin(),
        settings::settings(),
        roles::roles(),
        token::token(),
        token::verify(),
    ]
}

/// Gets the ID of the guild a command was used in.
///
/// All commands are `guild_only`, so this only fails if Discord delivers a guild command
/// outside a guild.
fn guild_id(ctx: Context<'_>) -> Result<u64, AppError> {
    ctx.guild_id()
        .map(|id| id.get())
        .ok_or_else(|| AppError::BadRequest("This command can only be used in a server".to_string()))
}

/// Sends an embed visible only to the command's user.
async fn reply(ctx: Context<'_>, embed: CreateEmbed) -> Result<(), AppError> {
    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;

    Ok(())
}
