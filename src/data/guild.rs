use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::guild::{Guild, UpsertGuildParam};

pub struct DiscordGuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordGuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or refreshes a guild row from gateway data.
    ///
    /// Name and member count are overwritten on conflict; welcome settings and the
    /// creation timestamp are left untouched.
    ///
    /// # Arguments
    /// - `param` - Guild ID, name and member count reported by Discord
    ///
    /// # Returns
    /// - `Ok(Guild)` - The stored guild after the upsert
    /// - `Err(DbErr)` - Database error during insert or ID parsing
    pub async fn upsert(&self, param: UpsertGuildParam) -> Result<Guild, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::DiscordGuild::insert(entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(param.guild_id.to_string()),
            name: ActiveValue::Set(param.name),
            member_count: ActiveValue::Set(param.member_count as i64),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::discord_guild::Column::GuildId)
                .update_columns([
                    entity::discord_guild::Column::Name,
                    entity::discord_guild::Column::MemberCount,
                    entity::discord_guild::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Guild::from_entity(entity)
    }

    /// Finds a guild by its Discord guild ID
    ///
    /// # Arguments
    /// - `guild_id`: Discord's unique identifier for the guild (u64)
    ///
    /// # Returns
    /// - `Ok(Some(Guild))`: Guild found in database
    /// - `Ok(None)`: Guild not found (bot not in this guild)
    /// - `Err(DbErr)`: Database error during query
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<Guild>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
            .map(Guild::from_entity)
            .transpose()
    }

    /// Gets every stored guild ordered by name
    pub async fn get_all(&self) -> Result<Vec<Guild>, DbErr> {
        entity::prelude::DiscordGuild::find()
            .order_by_asc(entity::discord_guild::Column::Name)
            .all(self.db)
            .await?
            .into_iter()
            .map(Guild::from_entity)
            .collect()
    }

    pub async fn exists(&self, guild_id: u64) -> Result<bool, DbErr> {
        let count = entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Replaces the welcome title and text of a guild.
    ///
    /// Passing `None` for both clears the welcome message.
    ///
    /// # Returns
    /// - `Ok(Some(Guild))` - Guild updated
    /// - `Ok(None)` - No guild with this ID
    /// - `Err(DbErr)` - Database error during lookup or update
    pub async fn update_welcome(
        &self,
        guild_id: u64,
        title: Option<String>,
        text: Option<String>,
    ) -> Result<Option<Guild>, DbErr> {
        let Some(guild) = entity::prelude::DiscordGuild::find()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::discord_guild::ActiveModel = guild.into();
        active_model.welcome_title = ActiveValue::Set(title);
        active_model.welcome_text = ActiveValue::Set(text);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        Guild::from_entity(updated).map(Some)
    }

    /// Deletes a guild row.
    ///
    /// Queues, sessions, role mappings and tokens of the guild are removed by the
    /// cascade constraints.
    ///
    /// # Returns
    /// - `Ok(true)` - Guild deleted
    /// - `Ok(false)` - Guild did not exist
    pub async fn delete(&self, guild_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::DiscordGuild::delete_many()
            .filter(entity::discord_guild::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every guild whose ID is not in `guild_ids`.
    ///
    /// Used on startup to drop guilds the bot was removed from while offline.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of guild rows deleted
    pub async fn delete_not_in(&self, guild_ids: &[u64]) -> Result<u64, DbErr> {
        let mut query = entity::prelude::DiscordGuild::delete_many();

        if !guild_ids.is_empty() {
            let guild_id_strings: Vec<String> = guild_ids.iter().map(|id| id.to_string()).collect();
            query = query.filter(entity::discord_guild::Column::GuildId.is_not_in(guild_id_strings));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
