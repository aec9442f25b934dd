use crate::error::{config::ConfigError, AppError};

/// Cron expression used when `TOKEN_CLEANUP_SCHEDULE` is not set: every 15 minutes.
pub const DEFAULT_TOKEN_CLEANUP_SCHEDULE: &str = "0 */15 * * * *";

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,

    /// Guild to register slash commands in; `None` registers them globally.
    pub dev_guild_id: Option<u64>,
    pub token_cleanup_schedule: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from a variable lookup function.
    ///
    /// Blank values are treated as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &str| {
            var(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let dev_guild_id = var("DEV_GUILD_ID")
            .map(|value| {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidEnvVar {
                        name: "DEV_GUILD_ID".to_string(),
                        reason: e.to_string(),
                    })
            })
            .transpose()?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            dev_guild_id,
            token_cleanup_schedule: var("TOKEN_CLEANUP_SCHEDULE")
                .unwrap_or_else(|| DEFAULT_TOKEN_CLEANUP_SCHEDULE.to_string()),
        })
    }
}
