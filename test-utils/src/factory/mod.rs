//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let guild = factory::create_guild(&db).await?;
//!     let queue = factory::create_queue(&db, &guild.guild_id).await?;
//!
//!     // Create with all dependencies
//!     let (guild, queue) = factory::helpers::create_queue_with_guild(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let queue = factory::queue::QueueFactory::new(&db, &guild.guild_id)
//!     .name("alpha")
//!     .locked(true)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `discord_guild` - Create Discord guild entities
//! - `queue` - Create queue entities
//! - `queue_session` - Create queue session entities
//! - `guild_role` - Create role mapping entities
//! - `guild_token` - Create invite/verification token entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod discord_guild;
pub mod guild_role;
pub mod guild_token;
pub mod helpers;
pub mod queue;
pub mod queue_session;

// Re-export commonly used factory functions for concise usage
pub use discord_guild::create_guild;
pub use guild_role::create_guild_role;
pub use guild_token::create_token;
pub use queue::create_queue;
pub use queue_session::create_session;
