use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::model::queue::{CreateQueueParam, Queue};

pub struct QueueRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> QueueRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new queue, unlocked and with its schedule disabled
    pub async fn create(&self, param: CreateQueueParam) -> Result<Queue, DbErr> {
        let now = Utc::now();

        let entity = entity::queue::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            locked: ActiveValue::Set(false),
            schedule_enabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Queue::from_entity(entity)
    }

    /// Finds a queue by name within a guild
    ///
    /// Names are matched exactly; the unique index on (guild_id, name) guarantees at
    /// most one row.
    pub async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<Queue>, DbErr> {
        entity::prelude::Queue::find()
            .filter(entity::queue::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::queue::Column::Name.eq(name))
            .one(self.db)
            .await?
            .map(Queue::from_entity)
            .transpose()
    }

    /// Gets all queues of a guild ordered by name
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<Queue>, DbErr> {
        entity::prelude::Queue::find()
            .filter(entity::queue::Column::GuildId.eq(guild_id.to_string()))
            .order_by_asc(entity::queue::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Queue::from_entity)
            .collect()
    }

    /// Deletes a queue and, through the cascade, its sessions
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Queue::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Sets the schedule-enabled flag of a queue.
    ///
    /// Enabling only applies to unlocked queues; the `locked = false` condition is part of
    /// the UPDATE so a concurrent lock cannot leave a locked queue scheduled.
    ///
    /// # Returns
    /// - `Ok(true)` - Flag written
    /// - `Ok(false)` - No unlocked queue with this ID (when enabling) or no queue at all
    pub async fn set_schedule_enabled(&self, id: i32, enabled: bool) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Queue::update_many()
            .col_expr(entity::queue::Column::ScheduleEnabled, Expr::value(enabled))
            .col_expr(entity::queue::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::queue::Column::Id.eq(id));

        if enabled {
            query = query.filter(entity::queue::Column::Locked.eq(false));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }

    /// Locks a queue and disables its schedule in a single statement.
    ///
    /// Both columns are written by the same UPDATE so no reader can observe a locked
    /// queue with its schedule still enabled.
    pub async fn lock(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Queue::update_many()
            .col_expr(entity::queue::Column::Locked, Expr::value(true))
            .col_expr(entity::queue::Column::ScheduleEnabled, Expr::value(false))
            .col_expr(entity::queue::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::queue::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Unlocks a queue, leaving its schedule flag as is
    pub async fn unlock(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Queue::update_many()
            .col_expr(entity::queue::Column::Locked, Expr::value(false))
            .col_expr(entity::queue::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::queue::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
