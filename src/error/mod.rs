//! Error types for the bot.
//!
//! `AppError` is the single error type returned by repositories, services and command
//! handlers. Domain failures are carried as kind enums (`QueueError`, `TokenError`) so
//! the command layer can decide how each one is presented to Discord users; see
//! `bot::commands::error` for that mapping.

pub mod config;
pub mod internal;
pub mod queue;
pub mod token;

use thiserror::Error;

use crate::error::{config::ConfigError, internal::InternalError, queue::QueueError, token::TokenError};

/// Top-level application error type.
///
/// Aggregates every error that can occur while handling a command, a gateway event or a
/// scheduled job. Most variants use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Never interpreted by services; surfaced to the caller unchanged.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Queue lookup or state transition failure.
    #[error(transparent)]
    QueueErr(#[from] QueueError),

    /// Token lookup or redemption failure.
    #[error(transparent)]
    TokenErr(#[from] TokenError),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),

    /// Invalid input supplied by the caller.
    ///
    /// # Fields
    /// - Message describing what was invalid about the request
    #[error("{0}")]
    BadRequest(String),

    /// Unexpected internal failure, likely a bug.
    #[error(transparent)]
    InternalError(#[from] InternalError),
}

impl AppError {
    /// Returns `true` for every "requested thing does not exist" error kind.
    ///
    /// Groups the generic `NotFound` variant with the domain-specific not-found kinds so
    /// callers and tests can treat unknown guilds, queues and tokens uniformly.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::QueueErr(QueueError::NotFound { .. })
                | AppError::QueueErr(QueueError::GuildNotFound { .. })
                | AppError::TokenErr(TokenError::NotFound)
        )
    }
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}
