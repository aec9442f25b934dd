//! Queue factory for creating test queue entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test queues with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let queue = QueueFactory::new(&db, &guild.guild_id)
///     .name("alpha")
///     .schedule_enabled(true)
///     .build()
///     .await?;
/// ```
pub struct QueueFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    description: Option<String>,
    locked: bool,
    schedule_enabled: bool,
}

impl<'a> QueueFactory<'a> {
    /// Creates a new QueueFactory with default values.
    ///
    /// Defaults:
    /// - name: `"queue-{id}"`
    /// - description: `None`
    /// - locked: `false`
    /// - schedule_enabled: `false`
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            name: format!("queue-{}", next_id()),
            description: None,
            locked: false,
            schedule_enabled: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    pub fn schedule_enabled(mut self, schedule_enabled: bool) -> Self {
        self.schedule_enabled = schedule_enabled;
        self
    }

    /// Builds and inserts the queue entity into the database.
    pub async fn build(self) -> Result<entity::queue::Model, DbErr> {
        let now = Utc::now();

        entity::queue::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            locked: ActiveValue::Set(self.locked),
            schedule_enabled: ActiveValue::Set(self.schedule_enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unlocked queue with default values in the given guild.
pub async fn create_queue(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::queue::Model, DbErr> {
    QueueFactory::new(db, guild_id).build().await
}
