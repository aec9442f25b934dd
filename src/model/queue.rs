//! Queue and session domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Longest queue name accepted on creation.
pub const MAX_QUEUE_NAME_LENGTH: usize = 64;

/// A named, guild-scoped queue with its lock and schedule state.
#[derive(Debug, Clone, PartialEq)]
pub struct Queue {
    /// Database ID of the queue.
    pub id: i32,
    /// Discord guild ID that owns the queue.
    pub guild_id: u64,
    /// Queue name, unique within the guild.
    pub name: String,
    pub description: Option<String>,
    /// Locked queues refuse new sessions and keep their schedule disabled.
    pub locked: bool,
    pub schedule_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Queue {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Queue)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::queue::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            id: entity.id,
            guild_id,
            name: entity.name,
            description: entity.description,
            locked: entity.locked,
            schedule_enabled: entity.schedule_enabled,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

/// Parameters for creating a queue.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateQueueParam {
    pub guild_id: u64,
    pub name: String,
    pub description: Option<String>,
}

/// A user's participation in a queue.
///
/// The session is active while `ended_at` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueSession {
    pub id: i32,
    pub guild_id: u64,
    pub queue_id: i32,
    /// Discord user ID of the participant.
    pub user_id: u64,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

impl QueueSession {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(QueueSession)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id or user_id as u64
    pub fn from_entity(entity: entity::queue_session::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let user_id = entity
            .user_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse user_id: {}", e)))?;

        Ok(Self {
            id: entity.id,
            guild_id,
            queue_id: entity.queue_id,
            user_id,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
        })
    }
}

/// Display-ready data describing one queue.
///
/// Returned by the queue state service; rendering into an embed happens in the bot layer.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueSummary {
    pub name: String,
    pub description: Option<String>,
    pub locked: bool,
    pub schedule_enabled: bool,
    /// Number of sessions in this queue that have not ended.
    pub active_sessions: u64,
}

impl QueueSummary {
    pub fn new(queue: Queue, active_sessions: u64) -> Self {
        Self {
            name: queue.name,
            description: queue.description,
            locked: queue.locked,
            schedule_enabled: queue.schedule_enabled,
            active_sessions,
        }
    }
}
