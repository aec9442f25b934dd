//! Queue provisioning and participation.

use sea_orm::DatabaseConnection;

use crate::{
    data::{DiscordGuildRepository, QueueRepository, QueueSessionRepository},
    error::{queue::QueueError, AppError},
    model::queue::{CreateQueueParam, Queue, QueueSession, QueueSummary, MAX_QUEUE_NAME_LENGTH},
};

pub struct QueueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a queue in a guild.
    ///
    /// The name is trimmed before it is validated and stored.
    ///
    /// # Returns
    /// - `Ok(Queue)` - Created queue, unlocked with its schedule disabled
    /// - `Err(AppError::BadRequest)` - Name empty or longer than 64 characters
    /// - `Err(AppError::QueueErr(QueueError::GuildNotFound))` - Guild unknown to the bot
    /// - `Err(AppError::QueueErr(QueueError::AlreadyExists))` - Name taken in this guild
    pub async fn create(&self, mut param: CreateQueueParam) -> Result<Queue, AppError> {
        param.name = validate_queue_name(&param.name)?;
        param.description = param
            .description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        if !DiscordGuildRepository::new(self.db)
            .exists(param.guild_id)
            .await?
        {
            return Err(QueueError::GuildNotFound {
                guild_id: param.guild_id,
            }
            .into());
        }

        let repo = QueueRepository::new(self.db);

        if repo.find_by_name(param.guild_id, &param.name).await?.is_some() {
            return Err(QueueError::AlreadyExists { name: param.name }.into());
        }

        let queue = repo.create(param).await?;

        tracing::info!("Created queue '{}' in guild {}", queue.name, queue.guild_id);

        Ok(queue)
    }

    /// Deletes a queue and all of its sessions.
    ///
    /// # Returns
    /// - `Ok(())` - Queue deleted
    /// - `Err(AppError::QueueErr(QueueError::NotFound))` - No such queue in the guild
    pub async fn delete(&self, guild_id: u64, name: &str) -> Result<(), AppError> {
        let repo = QueueRepository::new(self.db);
        let queue = find_queue(&repo, guild_id, name).await?;

        repo.delete(queue.id).await?;

        tracing::info!("Deleted queue '{}' in guild {}", queue.name, guild_id);

        Ok(())
    }

    /// Lists the queues of a guild, ordered by name, with their active session counts.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<QueueSummary>, AppError> {
        let session_repo = QueueSessionRepository::new(self.db);
        let queues = QueueRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        let mut summaries = Vec::with_capacity(queues.len());
        for queue in queues {
            let active_sessions = session_repo.count_active_by_queue(queue.id).await?;
            summaries.push(QueueSummary::new(queue, active_sessions));
        }

        Ok(summaries)
    }

    /// Starts a session for a user in a queue.
    ///
    /// # Returns
    /// - `Ok(QueueSession)` - The new active session
    /// - `Err(AppError::QueueErr(QueueError::NotFound))` - No such queue in the guild
    /// - `Err(AppError::QueueErr(QueueError::Locked))` - Queue is locked
    /// - `Err(AppError::QueueErr(QueueError::AlreadyJoined))` - User already has an active session
    pub async fn join(
        &self,
        guild_id: u64,
        name: &str,
        user_id: u64,
    ) -> Result<QueueSession, AppError> {
        let queue = find_queue(&QueueRepository::new(self.db), guild_id, name).await?;

        if queue.locked {
            return Err(QueueError::Locked { name: queue.name }.into());
        }

        let session_repo = QueueSessionRepository::new(self.db);

        if session_repo.find_active(queue.id, user_id).await?.is_some() {
            return Err(QueueError::AlreadyJoined { name: queue.name }.into());
        }

        Ok(session_repo.start(guild_id, queue.id, user_id).await?)
    }

    /// Ends a user's session in a queue.
    ///
    /// # Returns
    /// - `Ok(())` - Session ended
    /// - `Err(AppError::QueueErr(QueueError::NotFound))` - No such queue in the guild
    /// - `Err(AppError::QueueErr(QueueError::NotJoined))` - User had no active session
    pub async fn leave(&self, guild_id: u64, name: &str, user_id: u64) -> Result<(), AppError> {
        let queue = find_queue(&QueueRepository::new(self.db), guild_id, name).await?;

        let ended = QueueSessionRepository::new(self.db)
            .end_for_user_in_queue(queue.id, user_id)
            .await?;

        if ended == 0 {
            return Err(QueueError::NotJoined { name: queue.name }.into());
        }

        Ok(())
    }
}

async fn find_queue(repo: &QueueRepository<'_>, guild_id: u64, name: &str) -> Result<Queue, AppError> {
    repo.find_by_name(guild_id, name).await?.ok_or_else(|| {
        QueueError::NotFound {
            name: name.to_string(),
        }
        .into()
    })
}

/// Trims a queue name and checks its length.
///
/// # Returns
/// - `Ok(String)` - The trimmed name
/// - `Err(AppError::BadRequest)` - Name empty after trimming or too long
fn validate_queue_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();

    if name.is_empty() {
        return Err(AppError::BadRequest("Queue name cannot be empty".to_string()));
    }
    if name.chars().count() > MAX_QUEUE_NAME_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Queue name cannot be longer than {} characters",
            MAX_QUEUE_NAME_LENGTH
        )));
    }

    Ok(name.to_string())
}
