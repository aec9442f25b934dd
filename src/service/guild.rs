//! Guild rows and per-guild settings.

use sea_orm::DatabaseConnection;
use serenity::all::Guild as SerenityGuild;

use crate::{
    data::DiscordGuildRepository,
    error::AppError,
    model::guild::{
        Guild, UpsertGuildParam, MAX_WELCOME_TEXT_LENGTH, MAX_WELCOME_TITLE_LENGTH,
    },
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates or refreshes the row of a guild from gateway data.
    pub async fn sync_guild(&self, guild: &SerenityGuild) -> Result<Guild, AppError> {
        let guild = DiscordGuildRepository::new(self.db)
            .upsert(UpsertGuildParam::from(guild))
            .await?;

        tracing::debug!("Synced guild {} ({})", guild.name, guild.guild_id);

        Ok(guild)
    }

    /// Removes the rows of every guild not in `joined_guild_ids`.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of guild rows removed
    pub async fn reconcile(&self, joined_guild_ids: &[u64]) -> Result<u64, AppError> {
        let repo = DiscordGuildRepository::new(self.db);

        for guild in repo.get_all().await? {
            if !joined_guild_ids.contains(&guild.guild_id) {
                tracing::debug!("Removing left guild {} ({})", guild.name, guild.guild_id);
            }
        }

        let removed = repo.delete_not_in(joined_guild_ids).await?;

        if removed > 0 {
            tracing::info!("Removed {} guilds the bot is no longer in", removed);
        }

        Ok(removed)
    }

    /// Removes a guild and, through the cascade, everything it owns.
    ///
    /// # Returns
    /// - `Ok(true)` - Guild removed
    /// - `Ok(false)` - Guild was not stored
    pub async fn remove(&self, guild_id: u64) -> Result<bool, AppError> {
        let removed = DiscordGuildRepository::new(self.db).delete(guild_id).await?;

        if removed {
            tracing::info!("Removed guild {}", guild_id);
        }

        Ok(removed)
    }

    /// Gets the stored settings of a guild.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Guild row with its welcome settings
    /// - `Err(AppError::NotFound)` - Guild unknown to the bot
    pub async fn get_settings(&self, guild_id: u64) -> Result<Guild, AppError> {
        DiscordGuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| guild_not_found(guild_id))
    }

    /// Sets the welcome message sent to new members.
    ///
    /// A blank title falls back to the default title when the message is sent.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Updated guild
    /// - `Err(AppError::BadRequest)` - Text is blank, or text or title is too long
    /// - `Err(AppError::NotFound)` - Guild unknown to the bot
    pub async fn set_welcome(
        &self,
        guild_id: u64,
        title: Option<String>,
        text: String,
    ) -> Result<Guild, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::BadRequest(
                "Welcome text cannot be empty".to_string(),
            ));
        }
        if text.chars().count() > MAX_WELCOME_TEXT_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Welcome text cannot be longer than {} characters",
                MAX_WELCOME_TEXT_LENGTH
            )));
        }
        let title = title
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        if title
            .as_ref()
            .is_some_and(|t| t.chars().count() > MAX_WELCOME_TITLE_LENGTH)
        {
            return Err(AppError::BadRequest(format!(
                "Welcome title cannot be longer than {} characters",
                MAX_WELCOME_TITLE_LENGTH
            )));
        }

        DiscordGuildRepository::new(self.db)
            .update_welcome(guild_id, title, Some(text.to_string()))
            .await?
            .ok_or_else(|| guild_not_found(guild_id))
    }

    /// Clears the welcome message so new members get no DM.
    pub async fn clear_welcome(&self, guild_id: u64) -> Result<Guild, AppError> {
        DiscordGuildRepository::new(self.db)
            .update_welcome(guild_id, None, None)
            .await?
            .ok_or_else(|| guild_not_found(guild_id))
    }
}

fn guild_not_found(guild_id: u64) -> AppError {
    AppError::NotFound(format!("Guild {} not found", guild_id))
}
