//! Invite and verification tokens.
//!
//! Tokens are short random codes an admin hands out. Redeeming one with `/verify` grants
//! the Discord role mapped for the token's kind. Use counting is a compare-and-swap on the
//! stored count, so concurrent redemptions of a limited token never exceed `max_uses`.

use chrono::{Duration, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::{DiscordGuildRepository, GuildTokenRepository},
    error::{internal::InternalError, token::TokenError, AppError},
    model::{
        role::RoleMapping,
        token::{CreateTokenParam, Token},
    },
    service::RoleMappingService,
};

/// Length of generated token codes.
pub const TOKEN_CODE_LENGTH: usize = 10;

/// Largest use limit a token can store.
pub const MAX_TOKEN_USES: u32 = i32::MAX as u32;

/// Attempts at finding an unused code before giving up.
const MAX_CODE_ATTEMPTS: usize = 5;

pub struct TokenService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TokenService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Issues a new token with a random code.
    ///
    /// # Arguments
    /// - `param` - Guild, kind, issuer, optional use limit and optional lifetime
    ///
    /// # Returns
    /// - `Ok(Token)` - Stored token with zero uses
    /// - `Err(AppError::BadRequest)` - Use limit of zero or above `MAX_TOKEN_USES`, or a
    ///   non-positive lifetime
    /// - `Err(AppError::NotFound)` - Guild unknown to the bot
    /// - `Err(AppError::InternalError)` - No unused code found after several attempts
    pub async fn create(&self, param: CreateTokenParam) -> Result<Token, AppError> {
        if param.max_uses == Some(0) {
            return Err(AppError::BadRequest(
                "Maximum uses must be at least 1".to_string(),
            ));
        }
        if param.max_uses.is_some_and(|max| max > MAX_TOKEN_USES) {
            return Err(AppError::BadRequest(format!(
                "Maximum uses must be at most {}",
                MAX_TOKEN_USES
            )));
        }
        if param.ttl.is_some_and(|ttl| ttl <= Duration::zero()) {
            return Err(AppError::BadRequest(
                "Token lifetime must be positive".to_string(),
            ));
        }
        if !DiscordGuildRepository::new(self.db)
            .exists(param.guild_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "Guild {} not found",
                param.guild_id
            )));
        }

        let repo = GuildTokenRepository::new(self.db);
        let code = self.unused_code(&repo).await?;
        let expires_at = param.ttl.map(|ttl| Utc::now() + ttl);

        let token = repo
            .create(
                param.guild_id,
                code,
                param.kind,
                param.created_by,
                param.max_uses,
                expires_at,
            )
            .await?;

        tracing::info!(
            "User {} created {} token in guild {}",
            token.created_by,
            token.kind.as_str(),
            token.guild_id
        );

        Ok(token)
    }

    /// Redeems a token, recording one use.
    ///
    /// The role mapping is checked before the use is recorded so a misconfigured guild
    /// does not burn token uses.
    ///
    /// # Returns
    /// - `Ok((Token, RoleMapping))` - Token after the use and the role to grant
    /// - `Err(AppError::TokenErr(TokenError::NotFound))` - No such code in the guild
    /// - `Err(AppError::TokenErr(TokenError::Expired))` - Token expired
    /// - `Err(AppError::TokenErr(TokenError::Exhausted))` - No uses left
    /// - `Err(AppError::TokenErr(TokenError::RoleNotMapped))` - Granted role kind is unmapped
    pub async fn redeem(
        &self,
        guild_id: u64,
        code: &str,
    ) -> Result<(Token, RoleMapping), AppError> {
        let repo = GuildTokenRepository::new(self.db);
        let code = code.trim();

        loop {
            let mut token = repo
                .find_by_code(guild_id, code)
                .await?
                .ok_or(TokenError::NotFound)?;

            if token.is_expired(Utc::now()) {
                return Err(TokenError::Expired.into());
            }
            if token.is_exhausted() {
                return Err(TokenError::Exhausted.into());
            }

            let granted = token.kind.granted_role();
            let mapping = RoleMappingService::new(self.db)
                .get(guild_id, granted)
                .await?
                .ok_or(TokenError::RoleNotMapped(granted))?;

            // A lost race means another redemption went through; re-read and re-check
            if repo.try_consume(token.id, token.uses).await? {
                token.uses += 1;
                return Ok((token, mapping));
            }
        }
    }

    /// Gives back the use recorded by a redemption whose role grant failed.
    ///
    /// # Returns
    /// - `Ok(true)` - Use given back
    /// - `Ok(false)` - Token was revoked or has no recorded uses
    pub async fn release(&self, token: &Token) -> Result<bool, AppError> {
        let repo = GuildTokenRepository::new(self.db);

        loop {
            let Some(current) = repo.find_by_code(token.guild_id, &token.code).await? else {
                return Ok(false);
            };
            if current.uses == 0 {
                return Ok(false);
            }

            if repo.release(current.id, current.uses).await? {
                tracing::info!(
                    "Gave back a use of {} token in guild {}",
                    current.kind.as_str(),
                    current.guild_id
                );
                return Ok(true);
            }
        }
    }

    /// Deletes a token.
    ///
    /// # Returns
    /// - `Ok(())` - Token deleted
    /// - `Err(AppError::TokenErr(TokenError::NotFound))` - No such code in the guild
    pub async fn revoke(&self, guild_id: u64, code: &str) -> Result<(), AppError> {
        if !GuildTokenRepository::new(self.db)
            .delete(guild_id, code.trim())
            .await?
        {
            return Err(TokenError::NotFound.into());
        }

        Ok(())
    }

    /// Lists the tokens of a guild, newest first.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<Token>, AppError> {
        Ok(GuildTokenRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?)
    }

    /// Deletes every expired token across all guilds.
    ///
    /// # Returns
    /// - `Ok(count)` - Number of tokens deleted
    pub async fn purge_expired(&self) -> Result<u64, AppError> {
        Ok(GuildTokenRepository::new(self.db)
            .delete_expired(Utc::now())
            .await?)
    }

    async fn unused_code(&self, repo: &GuildTokenRepository<'_>) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code();
            if !repo.code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(InternalError::TokenCodeExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        }
        .into())
    }
}

/// Generates a random alphanumeric token code.
fn generate_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                             abcdefghijklmnopqrstuvwxyz\
                             0123456789";

    let mut rng = rand::rng();

    (0..TOKEN_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
