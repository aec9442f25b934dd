use thiserror::Error;

use crate::model::role::RoleKind;

/// Failures when redeeming or managing invite/verification tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// No token with this code exists in the guild.
    #[error("Token not found")]
    NotFound,

    /// The token's expiry time has passed.
    #[error("Token has expired")]
    Expired,

    /// The token has reached its maximum number of uses.
    #[error("Token has no uses left")]
    Exhausted,

    /// The guild has no Discord role mapped for the role this token grants.
    #[error("No role is mapped for {0}")]
    RoleNotMapped(RoleKind),
}
