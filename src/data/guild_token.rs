use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::token::{Token, TokenKind};

pub struct GuildTokenRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildTokenRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a newly issued token with zero uses
    pub async fn create(
        &self,
        guild_id: u64,
        code: String,
        kind: TokenKind,
        created_by: u64,
        max_uses: Option<u32>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Token, DbErr> {
        let max_uses = max_uses
            .map(i32::try_from)
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to store max_uses: {}", e)))?;

        let entity = entity::guild_token::ActiveModel {
            guild_id: ActiveValue::Set(guild_id.to_string()),
            code: ActiveValue::Set(code),
            kind: ActiveValue::Set(kind.as_str().to_string()),
            created_by: ActiveValue::Set(created_by.to_string()),
            max_uses: ActiveValue::Set(max_uses),
            uses: ActiveValue::Set(0),
            expires_at: ActiveValue::Set(expires_at),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Token::from_entity(entity)
    }

    /// Checks whether any guild already uses this code
    pub async fn code_exists(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::GuildToken::find()
            .filter(entity::guild_token::Column::Code.eq(code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Finds a token by code within a guild
    pub async fn find_by_code(&self, guild_id: u64, code: &str) -> Result<Option<Token>, DbErr> {
        entity::prelude::GuildToken::find()
            .filter(entity::guild_token::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_token::Column::Code.eq(code))
            .one(self.db)
            .await?
            .map(Token::from_entity)
            .transpose()
    }

    /// Gets all tokens of a guild, newest first
    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<Token>, DbErr> {
        entity::prelude::GuildToken::find()
            .filter(entity::guild_token::Column::GuildId.eq(guild_id.to_string()))
            .order_by_desc(entity::guild_token::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Token::from_entity)
            .collect()
    }

    /// Records one use of a token if its use count is still `observed_uses`.
    ///
    /// Compare-and-swap on the `uses` column: when two redemptions race, only the one
    /// whose observed count still matches the row increments it.
    ///
    /// # Returns
    /// - `Ok(true)` - Use recorded
    /// - `Ok(false)` - Count changed since it was read; caller should re-read
    pub async fn try_consume(&self, id: i32, observed_uses: u32) -> Result<bool, DbErr> {
        let observed = i32::try_from(observed_uses)
            .map_err(|e| DbErr::Custom(format!("Invalid use count: {}", e)))?;
        let Some(next) = observed.checked_add(1) else {
            return Ok(false);
        };

        let result = entity::prelude::GuildToken::update_many()
            .col_expr(entity::guild_token::Column::Uses, Expr::value(next))
            .filter(entity::guild_token::Column::Id.eq(id))
            .filter(entity::guild_token::Column::Uses.eq(observed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Gives back one use of a token if its use count is still `observed_uses`.
    ///
    /// Compare-and-swap like `try_consume`; a count of zero is never decremented.
    ///
    /// # Returns
    /// - `Ok(true)` - Use given back
    /// - `Ok(false)` - Count changed since it was read, or nothing to give back
    pub async fn release(&self, id: i32, observed_uses: u32) -> Result<bool, DbErr> {
        if observed_uses == 0 {
            return Ok(false);
        }
        let observed = i32::try_from(observed_uses)
            .map_err(|e| DbErr::Custom(format!("Invalid use count: {}", e)))?;

        let result = entity::prelude::GuildToken::update_many()
            .col_expr(entity::guild_token::Column::Uses, Expr::value(observed - 1))
            .filter(entity::guild_token::Column::Id.eq(id))
            .filter(entity::guild_token::Column::Uses.eq(observed))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Deletes a token by code
    ///
    /// # Returns
    /// - `Ok(true)` - Token deleted
    /// - `Ok(false)` - No such token in the guild
    pub async fn delete(&self, guild_id: u64, code: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildToken::delete_many()
            .filter(entity::guild_token::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_token::Column::Code.eq(code))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every token whose expiry is at or before `now`
    ///
    /// Tokens without an expiry are never deleted.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of tokens deleted
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::GuildToken::delete_many()
            .filter(entity::guild_token::Column::ExpiresAt.lte(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
