//! Direct messages to guild members.

use std::sync::Arc;

use serenity::{
    all::{CreateMessage, UserId},
    http::Http,
};

/// Sends direct messages through the Discord HTTP client.
///
/// Delivery failures (closed DMs, unknown users) are expected in normal operation, so
/// they are logged and reported as `false` instead of being returned as errors.
pub struct NotificationService {
    http: Arc<Http>,
}

impl NotificationService {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Sends a direct message to a user.
    ///
    /// # Arguments
    /// - `user_id` - Discord user ID of the recipient
    /// - `message` - Message content and embeds to send
    ///
    /// # Returns
    /// - `true` - Message delivered
    /// - `false` - Delivery failed; the failure has been logged
    pub async fn send_dm(&self, user_id: u64, message: CreateMessage) -> bool {
        match UserId::new(user_id)
            .direct_message(self.http.as_ref(), message)
            .await
        {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("Failed to send direct message to user {}: {}", user_id, e);
                false
            }
        }
    }
}
