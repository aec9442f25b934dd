//! Database repository layer.
//!
//! Each repository borrows the connection pool and performs the CRUD operations for one
//! table. Repositories use SeaORM entity models internally and return domain models from
//! `crate::model`, so nothing above this layer depends on the database schema.

pub mod guild;
pub mod guild_role;
pub mod guild_token;
pub mod queue;
pub mod queue_session;

pub use guild::DiscordGuildRepository;
pub use guild_role::GuildRoleRepository;
pub use guild_token::GuildTokenRepository;
pub use queue::QueueRepository;
pub use queue_session::QueueSessionRepository;

#[cfg(test)]
mod test;
