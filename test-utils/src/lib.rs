//! Warden Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the bot.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders that insert entities with sensible defaults
//! - **serenity**: Mock Serenity objects deserialized from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::DiscordGuild;
//!
//! #[tokio::test]
//! async fn test_guild_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(DiscordGuild)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
