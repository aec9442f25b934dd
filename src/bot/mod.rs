//! Discord bot integration.
//!
//! Slash commands are served by a poise framework registered on the serenity client,
//! while gateway events (guild joins, updates, removals and new members) go to the
//! serenity `EventHandler` in `handler`. Both share the same database connection pool.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive events about guild creation, updates, and deletion
//! - `GUILD_MEMBERS` - Receive member join events for welcome messages (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod commands;
pub mod embed;
pub mod handler;
pub mod start;
