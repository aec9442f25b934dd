//! SeaORM entities for the Warden database schema.
//!
//! Each module mirrors one table created by the `migration` crate. Discord snowflakes are
//! stored as text columns and parsed into `u64` at the repository boundary.

pub mod prelude;

pub mod discord_guild;
pub mod guild_role;
pub mod guild_token;
pub mod queue;
pub mod queue_session;
