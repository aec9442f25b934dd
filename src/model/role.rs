//! Role mapping models.
//!
//! A guild maps each `RoleKind` to at most one Discord role. The set of kinds is closed
//! so every display and permission decision can match exhaustively.

use std::fmt;

use sea_orm::DbErr;

/// The purposes a guild can assign a Discord role to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleKind {
    /// Bot administrators for the guild.
    Admin,
    /// Moderators who may manage queues.
    Moderator,
    /// Granted when redeeming an invite token.
    Member,
    /// Granted when redeeming a verification token.
    Verified,
}

impl RoleKind {
    /// Every variant, in display order.
    pub const ALL: [RoleKind; 4] = [
        RoleKind::Admin,
        RoleKind::Moderator,
        RoleKind::Member,
        RoleKind::Verified,
    ];

    /// Value stored in the `kind` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleKind::Admin => "admin",
            RoleKind::Moderator => "moderator",
            RoleKind::Member => "member",
            RoleKind::Verified => "verified",
        }
    }

    /// Human-readable label used in embeds.
    pub fn label(&self) -> &'static str {
        match self {
            RoleKind::Admin => "Admin",
            RoleKind::Moderator => "Moderator",
            RoleKind::Member => "Member",
            RoleKind::Verified => "Verified",
        }
    }

    /// Parses a stored `kind` column value.
    ///
    /// # Returns
    /// - `Ok(RoleKind)` - Known kind
    /// - `Err(DbErr::Custom)` - Column holds an unknown value
    pub fn from_db(value: &str) -> Result<Self, DbErr> {
        match value {
            "admin" => Ok(RoleKind::Admin),
            "moderator" => Ok(RoleKind::Moderator),
            "member" => Ok(RoleKind::Member),
            "verified" => Ok(RoleKind::Verified),
            other => Err(DbErr::Custom(format!("Unknown role kind: {}", other))),
        }
    }
}

impl fmt::Display for RoleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A Discord role mapped to a `RoleKind` in a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct RoleMapping {
    pub guild_id: u64,
    pub kind: RoleKind,
    /// Discord role ID as a u64.
    pub role_id: u64,
}

impl RoleMapping {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(RoleMapping)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - Failed to parse an ID or the kind column
    pub fn from_entity(entity: entity::guild_role::Model) -> Result<Self, DbErr> {
        let guild_id = entity
            .guild_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse guild_id: {}", e)))?;
        let role_id = entity
            .role_id
            .parse::<u64>()
            .map_err(|e| DbErr::Custom(format!("Failed to parse role_id: {}", e)))?;

        Ok(Self {
            guild_id,
            kind: RoleKind::from_db(&entity.kind)?,
            role_id,
        })
    }
}
