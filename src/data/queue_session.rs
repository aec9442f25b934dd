use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter,
};

use crate::model::queue::QueueSession;

/// Repository for queue participation records.
///
/// Ending sessions is always a single conditional UPDATE on `ended_at IS NULL`; the
/// returned count is the database's `rows_affected`, so concurrent terminations never
/// count the same session twice.
pub struct QueueSessionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueSessionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a new active session for a user in a queue.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID that owns the queue
    /// - `queue_id` - Database ID of the queue
    /// - `user_id` - Discord user ID of the participant
    ///
    /// # Returns
    /// - `Ok(QueueSession)` - The created session
    /// - `Err(DbErr)` - Database error during insert
    pub async fn start(
        &self,
        guild_id: u64,
        queue_id: i32,
        user_id: u64,
    ) -> Result<QueueSession, DbErr> {
        let entity = entity::queue_session::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            queue_id: ActiveValue::Set(queue_id),
            user_id: ActiveValue::Set(user_id.to_string()),
            started_at: ActiveValue::Set(Utc::now()),
            ended_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        QueueSession::from_entity(entity)
    }

    /// Finds the active session of a user in a queue, if any
    pub async fn find_active(
        &self,
        queue_id: i32,
        user_id: u64,
    ) -> Result<Option<QueueSession>, DbErr> {
        entity::prelude::QueueSession::find()
            .filter(entity::queue_session::Column::QueueId.eq(queue_id))
            .filter(entity::queue_session::Column::UserId.eq(user_id.to_string()))
            .filter(entity::queue_session::Column::EndedAt.is_null())
            .one(self.db)
            .await?
            .map(QueueSession::from_entity)
            .transpose()
    }

    /// Counts active sessions in a queue
    pub async fn count_active_by_queue(&self, queue_id: i32) -> Result<u64, DbErr> {
        entity::prelude::QueueSession::find()
            .filter(entity::queue_session::Column::QueueId.eq(queue_id))
            .filter(entity::queue_session::Column::EndedAt.is_null())
            .count(self.db)
            .await
    }

    /// Ends the active sessions of one user in one queue
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions ended (0 if none were active)
    pub async fn end_for_user_in_queue(&self, queue_id: i32, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::QueueSession::update_many()
            .col_expr(entity::queue_session::Column::EndedAt, Expr::value(Utc::now()))
            .filter(entity::queue_session::Column::QueueId.eq(queue_id))
            .filter(entity::queue_session::Column::UserId.eq(user_id.to_string()))
            .filter(entity::queue_session::Column::EndedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Ends every active session in a guild
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions ended (0 if none were active)
    pub async fn end_all_by_guild(&self, guild_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::QueueSession::update_many()
            .col_expr(entity::queue_session::Column::EndedAt, Expr::value(Utc::now()))
            .filter(entity::queue_session::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::queue_session::Column::EndedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Ends every active session of one user across the queues of a guild
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of sessions ended (0 if none were active)
    pub async fn end_all_by_user(&self, guild_id: u64, user_id: u64) -> Result<u64, DbErr> {
        let result = entity::prelude::QueueSession::update_many()
            .col_expr(entity::queue_session::Column::EndedAt, Expr::value(Utc::now()))
            .filter(entity::queue_session::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::queue_session::Column::UserId.eq(user_id.to_string()))
            .filter(entity::queue_session::Column::EndedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
