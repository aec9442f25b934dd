//! Presentation of command errors.
//!
//! Services report failures as error kinds. This module owns the text users see for
//! each kind; infrastructure failures are logged and replaced by a generic message so
//! database or Discord error details never reach a guild.

use poise::{CreateReply, FrameworkError};

use crate::bot::{embed, start::Data};
use crate::error::{queue::QueueError, token::TokenError, AppError};

const GENERIC_MESSAGE: &str = "Something went wrong while handling this command. Please try again later.";

/// Maps an error to the message shown to the command's user.
pub fn user_message(error: &AppError) -> String {
    match error {
        AppError::QueueErr(e) => match e {
            QueueError::NotFound { name } => format!("No queue named **{}** exists in this server.", name),
            QueueError::GuildNotFound { .. } => {
                "This server is not registered with the bot yet. Please try again in a moment.".to_string()
            }
            QueueError::AlreadyExists { name } => format!("A queue named **{}** already exists.", name),
            QueueError::Locked { name } => format!("Queue **{}** is locked.", name),
            QueueError::AlreadyJoined { name } => format!("You are already in queue **{}**.", name),
            QueueError::NotJoined { name } => format!("You are not in queue **{}**.", name),
        },
        AppError::TokenErr(e) => match e {
            TokenError::NotFound => "That code is not valid.".to_string(),
            TokenError::Expired => "That code has expired.".to_string(),
            TokenError::Exhausted => "That code has no uses left.".to_string(),
            TokenError::RoleNotMapped(kind) => format!(
                "No {} role is configured for this server. Ask an admin to set one with `/roles set`.",
                kind
            ),
        },
        AppError::NotFound(message) | AppError::BadRequest(message) => message.clone(),
        AppError::ConfigErr(_)
        | AppError::DbErr(_)
        | AppError::DiscordErr(_)
        | AppError::SchedulerErr(_)
        | AppError::InternalError(_) => GENERIC_MESSAGE.to_string(),
    }
}

/// Returns `true` for failures caused by the bot's environment rather than the user.
fn is_infrastructure(error: &AppError) -> bool {
    matches!(
        error,
        AppError::ConfigErr(_)
            | AppError::DbErr(_)
            | AppError::DiscordErr(_)
            | AppError::SchedulerErr(_)
            | AppError::InternalError(_)
    )
}

/// Framework error handler.
///
/// Command errors are rendered as an ephemeral error embed. Everything else (argument
/// parsing, failed permission checks, guild-only violations) goes to poise's builtin
/// handler.
pub async fn on_error(error: FrameworkError<'_, Data, AppError>) {
    match error {
        FrameworkError::Command { error, ctx, .. } => {
            if is_infrastructure(&error) {
                tracing::error!("Command /{} failed: {:?}", ctx.command().qualified_name, error);
            } else {
                tracing::debug!("Command /{} rejected: {}", ctx.command().qualified_name, error);
            }

            let reply = CreateReply::default()
                .embed(embed::error(user_message(&error)))
                .ephemeral(true);

            if let Err(e) = ctx.send(reply).await {
                tracing::warn!("Failed to send error reply: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                tracing::error!("Error while handling framework error: {}", e);
            }
        }
    }
}
