//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Provides monotonically increasing values for use in generating unique test
/// identifiers across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guild and one queue in it, both with default values.
///
/// # Returns
/// - `Ok((guild, queue))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_queue_with_guild(
    db: &DatabaseConnection,
) -> Result<(entity::discord_guild::Model, entity::queue::Model), DbErr> {
    let guild = crate::factory::discord_guild::create_guild(db).await?;
    let queue = crate::factory::queue::create_queue(db, &guild.guild_id).await?;

    Ok((guild, queue))
}

/// Creates `count` active sessions in a queue, one per generated user.
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created sessions in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_active_sessions(
    db: &DatabaseConnection,
    queue: &entity::queue::Model,
    count: usize,
) -> Result<Vec<entity::queue_session::Model>, DbErr> {
    let mut sessions = Vec::with_capacity(count);

    for _ in 0..count {
        sessions.push(crate::factory::queue_session::create_session(db, queue).await?);
    }

    Ok(sessions)
}
