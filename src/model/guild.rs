use chrono::{DateTime, Utc};
use sea_orm::DbErr;

/// Longest welcome text, in characters; the length of a Discord message.
pub const MAX_WELCOME_TEXT_LENGTH: usize = 2000;
/// Longest welcome title, in characters; the embed title limit.
pub const MAX_WELCOME_TITLE_LENGTH: usize = 256;

/// A Discord guild the bot is a member of, with its stored settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    /// Discord guild ID as a u64.
    pub guild_id: u64,
    /// Guild display name.
    pub name: String,
    /// Member count reported by Discord at the last sync.
    pub member_count: u64,
    /// Title of the welcome message sent to new members.
    pub welcome_title: Option<String>,
    /// Body of the welcome message sent to new members.
    pub welcome_text: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guild {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The database entity model to convert
    ///
    /// # Returns
    /// - `Ok(Guild)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse guild_id as u64
    pub fn from_entity(entity: entity::discord_guild::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;

        Ok(Self {
            guild_id,
            name: entity.name,
            member_count: entity.member_count.max(0) as u64,
            welcome_title: entity.welcome_title,
            welcome_text: entity.welcome_text,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Returns the welcome message as `(title, text)` when one is configured.
    ///
    /// A welcome message requires text; the title falls back to the guild name.
    pub fn welcome_message(&self) -> Option<(String, String)> {
        let text = self.welcome_text.as_ref()?;
        let title = self
            .welcome_title
            .clone()
            .unwrap_or_else(|| format!("Welcome to {}", self.name));

        Some((title, text.clone()))
    }
}

/// Parameters for creating or refreshing a guild row from gateway data.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertGuildParam {
    pub guild_id: u64,
    pub name: String,
    pub member_count: u64,
}

impl From<&serenity::all::Guild> for UpsertGuildParam {
    fn from(guild: &serenity::all::Guild) -> Self {
        Self {
            guild_id: guild.id.get(),
            name: guild.name.clone(),
            member_count: guild.member_count,
        }
    }
}
