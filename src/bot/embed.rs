//! Embed builders for command replies and direct messages.
//!
//! Every reply the bot sends is an embed built here, so colours and wording stay
//! consistent across commands.

use chrono::{DateTime, Utc};
use serenity::all::{Colour, CreateEmbed, CreateEmbedFooter};

use crate::model::{
    guild::Guild,
    queue::QueueSummary,
    role::{RoleKind, RoleMapping},
    token::Token,
};

const SUCCESS_COLOUR: Colour = Colour::DARK_GREEN;
const ERROR_COLOUR: Colour = Colour::RED;
const INFO_COLOUR: Colour = Colour::BLURPLE;
const LOCKED_COLOUR: Colour = Colour::ORANGE;

/// Discord's limit on embed description length, in characters.
const DESCRIPTION_LIMIT: usize = 4096;
/// Room kept free for the "…and N more" line of a truncated list.
const OVERFLOW_RESERVE: usize = 32;

pub fn success(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .colour(SUCCESS_COLOUR)
        .description(description)
}

pub fn error(description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title("Something went wrong")
        .colour(ERROR_COLOUR)
        .description(description)
}

/// Direct message sent to members joining a guild.
pub fn welcome(title: &str, text: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .colour(INFO_COLOUR)
        .description(text)
}

/// Builds the embed describing a single queue.
///
/// Locked queues are shown in a warning colour.
pub fn queue_summary(summary: &QueueSummary) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(format!("Queue: {}", summary.name))
        .colour(if summary.locked {
            LOCKED_COLOUR
        } else {
            INFO_COLOUR
        })
        .field("Status", lock_label(summary.locked), true)
        .field(
            "Schedule",
            if summary.schedule_enabled {
                "Enabled"
            } else {
                "Disabled"
            },
            true,
        )
        .field(
            "Active sessions",
            summary.active_sessions.to_string(),
            true,
        );

    if let Some(description) = &summary.description {
        embed = embed.description(description);
    }

    embed
}

/// Builds the embed listing every queue of a guild.
pub fn queue_list(queues: &[QueueSummary]) -> CreateEmbed {
    let description = if queues.is_empty() {
        "No queues have been created yet.".to_string()
    } else {
        bounded_lines(queues.iter().map(|q| {
            format!(
                "**{}** · {} · {} active",
                q.name,
                lock_label(q.locked),
                q.active_sessions
            )
        }))
    };

    CreateEmbed::new()
        .title("Queues")
        .colour(INFO_COLOUR)
        .description(description)
}

/// Builds the embed showing a guild's stored settings.
///
/// The welcome message goes in the description; field values are capped at 1024
/// characters while a welcome text may be up to 2000.
pub fn guild_settings(guild: &Guild) -> CreateEmbed {
    let welcome = match guild.welcome_message() {
        Some((title, text)) => format!("__Welcome message__\n**{}**\n{}", title, text),
        None => "__Welcome message__\nNot set".to_string(),
    };

    CreateEmbed::new()
        .title(format!("Settings for {}", guild.name))
        .colour(INFO_COLOUR)
        .description(welcome)
        .field("Members", guild.member_count.to_string(), true)
}

/// Builds the embed listing role mappings.
///
/// Every `RoleKind` gets a field, so unmapped kinds are shown as "Not set".
pub fn role_mappings(mappings: &[RoleMapping]) -> CreateEmbed {
    let fields = RoleKind::ALL.iter().map(|kind| {
        let value = mappings
            .iter()
            .find(|m| m.kind == *kind)
            .map(|m| format!("<@&{}>", m.role_id))
            .unwrap_or_else(|| "Not set".to_string());

        (kind.label(), value, true)
    });

    CreateEmbed::new()
        .title("Role mappings")
        .colour(INFO_COLOUR)
        .fields(fields)
}

/// Builds the embed shown to the issuer of a new token.
pub fn token_created(token: &Token) -> CreateEmbed {
    CreateEmbed::new()
        .title(format!("{} token created", token.kind.label()))
        .colour(SUCCESS_COLOUR)
        .description(format!(
            "Share this code; it is redeemed with `/verify`:\n`{}`",
            token.code
        ))
        .field("Uses", uses_label(token), true)
        .field("Expires", expiry_label(token.expires_at), true)
}

/// Builds the embed listing the tokens of a guild.
pub fn token_list(tokens: &[Token], now: DateTime<Utc>) -> CreateEmbed {
    let description = if tokens.is_empty() {
        "No tokens have been issued.".to_string()
    } else {
        bounded_lines(tokens.iter().map(|t| {
            let state = if t.is_expired(now) {
                " · expired"
            } else if t.is_exhausted() {
                " · used up"
            } else {
                ""
            };

            format!(
                "`{}` · {} · {} uses · expires {}{}",
                t.code,
                t.kind.label(),
                uses_label(t),
                expiry_label(t.expires_at),
                state
            )
        }))
    };

    CreateEmbed::new()
        .title("Tokens")
        .colour(INFO_COLOUR)
        .description(description)
        .footer(CreateEmbedFooter::new(format!("{} total", tokens.len())))
}

/// Joins lines into a description that fits `DESCRIPTION_LIMIT`.
///
/// Lines that no longer fit are dropped and counted in a trailing "…and N more" line.
fn bounded_lines(lines: impl ExactSizeIterator<Item = String>) -> String {
    let total = lines.len();
    let mut description = String::new();
    let mut length = 0;

    for (index, line) in lines.enumerate() {
        let separator = usize::from(index > 0);
        let needed = length + separator + line.chars().count();
        let budget = if index + 1 == total {
            DESCRIPTION_LIMIT
        } else {
            DESCRIPTION_LIMIT - OVERFLOW_RESERVE
        };

        if needed > budget {
            if index > 0 {
                description.push('\n');
            }
            description.push_str(&format!("…and {} more", total - index));
            return description;
        }

        if index > 0 {
            description.push('\n');
        }
        description.push_str(&line);
        length = needed;
    }

    description
}

fn lock_label(locked: bool) -> &'static str {
    if locked {
        "Locked"
    } else {
        "Open"
    }
}

fn uses_label(token: &Token) -> String {
    match token.max_uses {
        Some(max) => format!("{}/{}", token.uses, max),
        None => format!("{}/∞", token.uses),
    }
}

/// Formats an expiry as a Discord relative timestamp.
fn expiry_label(expires_at: Option<DateTime<Utc>>) -> String {
    match expires_at {
        Some(at) => format!("<t:{}:R>", at.timestamp()),
        None => "never".to_string(),
    }
}
