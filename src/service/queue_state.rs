//! Lock, schedule and session state of queues.
//!
//! `QueueStateService` backs the `/admin` commands. Every operation looks up its queue by
//! (guild, name) and fails with `QueueError::NotFound` when no such queue exists. Session
//! termination counts come straight from the database's affected-row count, so two
//! concurrent terminations never report the same session.

use sea_orm::DatabaseConnection;

use crate::{
    data::{DiscordGuildRepository, QueueRepository, QueueSessionRepository},
    error::{queue::QueueError, AppError},
    model::queue::{Queue, QueueSummary},
};

pub struct QueueStateService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueStateService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enables or disables the schedule of a queue.
    ///
    /// Setting the value the queue already has is a no-op. Locked queues cannot have
    /// their schedule enabled; disabling is always allowed.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID owning the queue
    /// - `queue_name` - Name of the queue within the guild
    /// - `enabled` - Desired schedule state
    ///
    /// # Returns
    /// - `Ok(())` - Queue now has the requested schedule state
    /// - `Err(AppError::QueueErr(QueueError::NotFound))` - No such queue in the guild
    /// - `Err(AppError::QueueErr(QueueError::Locked))` - Enabling a locked queue
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_schedule_enabled(
        &self,
        guild_id: u64,
        queue_name: &str,
        enabled: bool,
    ) -> Result<(), AppError> {
        let queue = self.find_queue(guild_id, queue_name).await?;

        if enabled && queue.locked {
            return Err(QueueError::Locked { name: queue.name }.into());
        }
        if queue.schedule_enabled == enabled {
            return Ok(());
        }

        let written = QueueRepository::new(self.db)
            .set_schedule_enabled(queue.id, enabled)
            .await?;

        if !written {
            return self
                .refused_schedule_write(guild_id, queue_name, enabled)
                .await;
        }

        Ok(())
    }

    /// Resolves a schedule write that matched no row.
    ///
    /// The queue was deleted or locked after it was read. A queue that meanwhile reached
    /// the requested state counts as success.
    ///
    /// # Returns
    /// - `Ok(())` - Queue already has the requested schedule state
    /// - `Err(AppError::QueueErr(QueueError::NotFound))` - Queue was deleted
    /// - `Err(AppError::QueueErr(QueueError::Locked))` - Queue was locked
    pub(super) async fn refused_schedule_write(
        &self,
        guild_id: u64,
        queue_name: &str,
        enabled: bool,
    ) -> Result<(), AppError> {
        let queue = self.find_queue(guild_id, queue_name).await?;

        if queue.schedule_enabled == enabled {
            return Ok(());
        }

        Err(QueueError::Locked { name: queue.name }.into())
    }

    /// Locks or unlocks a queue.
    ///
    /// Locking disables the schedule in the same statement, so callers never need to
    /// disable it first. Unlocking leaves the schedule disabled.
    ///
    /// # Returns
    /// - `Ok(())` - Queue now has the requested lock state
    /// - `Err(AppError::QueueErr(QueueError::NotFound))` - No such queue in the guild
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_queue_lock_state(
        &self,
        guild_id: u64,
        queue_name: &str,
        locked: bool,
    ) -> Result<(), AppError> {
        let queue = self.find_queue(guild_id, queue_name).await?;
        let repo = QueueRepository::new(self.db);

        if locked {
            repo.lock(queue.id).await?;
        } else {
            repo.unlock(queue.id).await?;
        }

        tracing::info!(
            "Queue '{}' in guild {} {}",
            queue.name,
            guild_id,
            if locked { "locked" } else { "unlocked" }
        );

        Ok(())
    }

    /// Ends every active session in a guild.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of sessions ended; 0 when none were active
    /// - `Err(AppError::QueueErr(QueueError::GuildNotFound))` - Guild unknown to the bot
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn terminate_all_sessions(&self, guild_id: u64) -> Result<u64, AppError> {
        self.ensure_guild(guild_id).await?;

        let ended = QueueSessionRepository::new(self.db)
            .end_all_by_guild(guild_id)
            .await?;

        tracing::info!("Terminated {} sessions in guild {}", ended, guild_id);

        Ok(ended)
    }

    /// Ends the active sessions of one user across all queues of a guild.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of sessions ended; 0 when the user had none
    /// - `Err(AppError::QueueErr(QueueError::GuildNotFound))` - Guild unknown to the bot
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn terminate_sessions_by_user(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<u64, AppError> {
        self.ensure_guild(guild_id).await?;

        let ended = QueueSessionRepository::new(self.db)
            .end_all_by_user(guild_id, user_id)
            .await?;

        tracing::info!(
            "Terminated {} sessions of user {} in guild {}",
            ended,
            user_id,
            guild_id
        );

        Ok(ended)
    }

    /// Gets the display data of a queue along with its active session count.
    ///
    /// # Returns
    /// - `Ok(QueueSummary)` - Queue state and session count
    /// - `Err(AppError::QueueErr(QueueError::NotFound))` - No such queue in the guild
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_queue_summary(
        &self,
        guild_id: u64,
        queue_name: &str,
    ) -> Result<QueueSummary, AppError> {
        let queue = self.find_queue(guild_id, queue_name).await?;

        let active_sessions = QueueSessionRepository::new(self.db)
            .count_active_by_queue(queue.id)
            .await?;

        Ok(QueueSummary::new(queue, active_sessions))
    }

    async fn find_queue(&self, guild_id: u64, queue_name: &str) -> Result<Queue, AppError> {
        QueueRepository::new(self.db)
            .find_by_name(guild_id, queue_name)
            .await?
            .ok_or_else(|| {
                QueueError::NotFound {
                    name: queue_name.to_string(),
                }
                .into()
            })
    }

    async fn ensure_guild(&self, guild_id: u64) -> Result<(), AppError> {
        if !DiscordGuildRepository::new(self.db).exists(guild_id).await? {
            return Err(QueueError::GuildNotFound { guild_id }.into());
        }

        Ok(())
    }
}
