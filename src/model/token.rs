//! Invite and verification token models.

use chrono::{DateTime, Duration, Utc};
use sea_orm::DbErr;

use crate::model::role::RoleKind;

/// What redeeming a token does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Admits a user as a guild member.
    Invite,
    /// Marks a user as verified.
    Verification,
}

impl TokenKind {
    /// Value stored in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Invite => "invite",
            TokenKind::Verification => "verification",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Invite => "Invite",
            TokenKind::Verification => "Verification",
        }
    }

    /// The mapped role a successful redemption grants.
    pub fn granted_role(&self) -> RoleKind {
        match self {
            TokenKind::Invite => RoleKind::Member,
            TokenKind::Verification => RoleKind::Verified,
        }
    }

    /// Parses a stored `kind` column value.
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "invite" => Ok(TokenKind::Invite),
            "verification" => Ok(TokenKind::Verification),
            other => Err(DbErr::Custom(format!("Unknown token kind: {}", other))),
        }
    }
}

/// An invite or verification token issued for a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub id: i32,
    pub guild_id: u64,
    /// The code users type into `/verify`.
    pub code: String,
    pub kind: TokenKind,
    /// Discord user ID of the issuer.
    pub created_by: u64,
    /// `None` means unlimited uses.
    pub max_uses: Option<u32>,
    pub uses: u32,
    /// `None` means the token never expires.
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Token {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Token)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse an ID or the kind column
    pub fn from_entity(entity: entity::guild_token::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let created_by = entity
            .created_by
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse created_by: {}", e)))?;

        Ok(Self {
            id: entity.id,
            guild_id,
            code: entity.code,
            kind: TokenKind::from_db(&entity.kind)?,
            created_by,
            max_uses: entity.max_uses.map(|m| m.max(0) as u32),
            uses: entity.uses.max(0) as u32,
            expires_at: entity.expires_at,
            created_at: entity.created_at,
        })
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| now >= expires_at)
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_uses.is_some_and(|max| self.uses >= max)
    }
}

/// Parameters for issuing a token.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateTokenParam {
    pub guild_id: u64,
    pub kind: TokenKind,
    pub created_by: u64,
    pub max_uses: Option<u32>,
    /// Lifetime from now; `None` for a token that never expires.
    pub ttl: Option<Duration>,
}
