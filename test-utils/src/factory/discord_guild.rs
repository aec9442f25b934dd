//! Discord guild factory for creating test guild entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test Discord guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_guild::DiscordGuildFactory;
///
/// let guild = DiscordGuildFactory::new(&db)
///     .guild_id("987654321")
///     .name("CustomGuild")
///     .build()
///     .await?;
/// ```
pub struct DiscordGuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    name: String,
    member_count: i64,
    welcome_title: Option<String>,
    welcome_text: Option<String>,
}

impl<'a> DiscordGuildFactory<'a> {
    /// Creates a new DiscordGuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: `"{id}"` where id is auto-incremented
    /// - name: `"Guild {id}"`
    /// - member_count: `1`
    /// - welcome_title / welcome_text: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            guild_id: id.to_string(),
            name: format!("Guild {}", id),
            member_count: 1,
            welcome_title: None,
            welcome_text: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn member_count(mut self, member_count: i64) -> Self {
        self.member_count = member_count;
        self
    }

    /// Sets the welcome message title and text.
    pub fn welcome(mut self, title: Option<String>, text: Option<String>) -> Self {
        self.welcome_title = title;
        self.welcome_text = text;
        self
    }

    /// Builds and inserts the guild entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discord_guild::Model)` - Created guild entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_guild::Model, DbErr> {
        let now = Utc::now();

        entity::discord_guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            member_count: ActiveValue::Set(self.member_count),
            welcome_title: ActiveValue::Set(self.welcome_title),
            welcome_text: ActiveValue::Set(self.welcome_text),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord guild with default values.
///
/// Shorthand for `DiscordGuildFactory::new(db).build().await`.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::discord_guild::Model, DbErr> {
    DiscordGuildFactory::new(db).build().await
}
