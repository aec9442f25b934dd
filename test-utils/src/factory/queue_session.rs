//! Queue session factory for creating test participation records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test queue sessions.
///
/// Sessions are active by default; call `ended_at` to create a finished one.
pub struct QueueSessionFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    queue_id: i32,
    user_id: String,
    ended_at: Option<DateTime<Utc>>,
}

impl<'a> QueueSessionFactory<'a> {
    /// Creates a new QueueSessionFactory for a queue.
    ///
    /// Defaults:
    /// - guild_id: the queue's guild
    /// - user_id: `"{id}"` where id is auto-incremented
    /// - ended_at: `None` (active)
    pub fn new(db: &'a DatabaseConnection, queue: &entity::queue::Model) -> Self {
        Self {
            db,
            guild_id: queue.guild_id.clone(),
            queue_id: queue.id,
            user_id: next_id().to_string(),
            ended_at: None,
        }
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn ended_at(mut self, ended_at: Option<DateTime<Utc>>) -> Self {
        self.ended_at = ended_at;
        self
    }

    /// Builds and inserts the session entity into the database.
    pub async fn build(self) -> Result<entity::queue_session::Model, DbErr> {
        entity::queue_session::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            queue_id: ActiveValue::Set(self.queue_id),
            user_id: ActiveValue::Set(self.user_id),
            started_at: ActiveValue::Set(Utc::now()),
            ended_at: ActiveValue::Set(self.ended_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active session for a generated user in the given queue.
pub async fn create_session(
    db: &DatabaseConnection,
    queue: &entity::queue::Model,
) -> Result<entity::queue_session::Model, DbErr> {
    QueueSessionFactory::new(db, queue).build().await
}
