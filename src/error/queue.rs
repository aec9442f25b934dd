use thiserror::Error;

/// Failures of queue lookups and queue state transitions.
///
/// These are domain kinds, not display strings: the `Display` text is meant for logs,
/// while the command layer decides what users see.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// No queue with this name exists in the guild.
    #[error("Queue '{name}' not found")]
    NotFound { name: String },

    /// The guild has no row, so it holds no queues or sessions.
    #[error("Guild {guild_id} is not known to the bot")]
    GuildNotFound { guild_id: u64 },

    /// A queue with this name already exists in the guild.
    #[error("Queue '{name}' already exists")]
    AlreadyExists { name: String },

    /// The queue is locked; joining and enabling the schedule are refused.
    #[error("Queue '{name}' is locked")]
    Locked { name: String },

    /// The user already has an active session in this queue.
    #[error("User already has an active session in queue '{name}'")]
    AlreadyJoined { name: String },

    /// The user has no active session in this queue.
    #[error("User has no active session in queue '{name}'")]
    NotJoined { name: String },
}
