//! Service layer.
//!
//! Services hold the business rules of the bot and coordinate repositories. They take
//! and return domain models and report failures as `AppError`, leaving presentation to
//! the command layer.

pub mod guild;
pub mod notification;
pub mod queue;
pub mod queue_state;
pub mod role;
pub mod token;

pub use guild::GuildService;
pub use notification::NotificationService;
pub use queue::QueueService;
pub use queue_state::QueueStateService;
pub use role::RoleMappingService;
pub use token::TokenService;

#[cfg(test)]
mod test;
