//! Invite/verification token factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test tokens with customizable limits.
pub struct GuildTokenFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    code: String,
    kind: String,
    max_uses: Option<i32>,
    uses: i32,
    expires_at: Option<DateTime<Utc>>,
}

impl<'a> GuildTokenFactory<'a> {
    /// Creates a new GuildTokenFactory with default values.
    ///
    /// Defaults:
    /// - code: `"CODE{id}"`
    /// - kind: `"invite"`
    /// - max_uses: `None` (unlimited)
    /// - uses: `0`
    /// - expires_at: `None` (never)
    pub fn new(db: &'a DatabaseConnection, guild_id: &str) -> Self {
        Self {
            db,
            guild_id: guild_id.to_string(),
            code: format!("CODE{}", next_id()),
            kind: "invite".to_string(),
            max_uses: None,
            uses: 0,
            expires_at: None,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    pub fn max_uses(mut self, max_uses: Option<i32>) -> Self {
        self.max_uses = max_uses;
        self
    }

    pub fn uses(mut self, uses: i32) -> Self {
        self.uses = uses;
        self
    }

    pub fn expires_at(mut self, expires_at: Option<DateTime<Utc>>) -> Self {
        self.expires_at = expires_at;
        self
    }

    /// Builds and inserts the token entity into the database.
    pub async fn build(self) -> Result<entity::guild_token::Model, DbErr> {
        entity::guild_token::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            code: ActiveValue::Set(self.code),
            kind: ActiveValue::Set(self.kind),
            created_by: ActiveValue::Set(next_id().to_string()),
            max_uses: ActiveValue::Set(self.max_uses),
            uses: ActiveValue::Set(self.uses),
            expires_at: ActiveValue::Set(self.expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unlimited, non-expiring invite token in the given guild.
pub async fn create_token(
    db: &DatabaseConnection,
    guild_id: &str,
) -> Result<entity::guild_token::Model, DbErr> {
    GuildTokenFactory::new(db, guild_id).build().await
}
