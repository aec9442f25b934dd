//! Slash command choices for closed domain enums.

use crate::model::{role::RoleKind, token::TokenKind};

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum RoleKindChoice {
    Admin,
    Moderator,
    Member,
    Verified,
}

impl From<RoleKindChoice> for RoleKind {
    fn from(choice: RoleKindChoice) -> Self {
        match choice {
            RoleKindChoice::Admin => RoleKind::Admin,
            RoleKindChoice::Moderator => RoleKind::Moderator,
            RoleKindChoice::Member => RoleKind::Member,
            RoleKindChoice::Verified => RoleKind::Verified,
        }
    }
}

#[derive(Debug, Clone, Copy, poise::ChoiceParameter)]
pub enum TokenKindChoice {
    #[name = "Invite (grants Member)"]
    Invite,
    #[name = "Verification (grants Verified)"]
    Verification,
}

impl From<TokenKindChoice> for TokenKind {
    fn from(choice: TokenKindChoice) -> Self {
        match choice {
            TokenKindChoice::Invite => TokenKind::Invite,
            TokenKindChoice::Verification => TokenKind::Verification,
        }
    }
}
