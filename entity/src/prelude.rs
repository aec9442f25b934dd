pub use super::discord_guild::Entity as DiscordGuild;
pub use super::guild_role::Entity as GuildRole;
pub use super::guild_token::Entity as GuildToken;
pub use super::queue::Entity as Queue;
pub use super::queue_session::Entity as QueueSession;
