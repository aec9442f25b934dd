//! Guild role mappings.

use sea_orm::DatabaseConnection;

use crate::{
    data::{DiscordGuildRepository, GuildRoleRepository},
    error::AppError,
    model::role::{RoleKind, RoleMapping},
};

pub struct RoleMappingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleMappingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Maps a Discord role to a role kind, replacing any previous mapping of the kind.
    ///
    /// # Returns
    /// - `Ok(RoleMapping)` - Stored mapping
    /// - `Err(AppError::NotFound)` - Guild unknown to the bot
    pub async fn set(
        &self,
        guild_id: u64,
        kind: RoleKind,
        role_id: u64,
    ) -> Result<RoleMapping, AppError> {
        if !DiscordGuildRepository::new(self.db).exists(guild_id).await? {
            return Err(AppError::NotFound(format!("Guild {} not found", guild_id)));
        }

        let mapping = GuildRoleRepository::new(self.db)
            .upsert(guild_id, kind, role_id)
            .await?;

        tracing::info!("Mapped {} role to {} in guild {}", kind, role_id, guild_id);

        Ok(mapping)
    }

    /// Removes the mapping of a role kind.
    ///
    /// # Returns
    /// - `Ok(())` - Mapping removed
    /// - `Err(AppError::NotFound)` - Kind was not mapped
    pub async fn remove(&self, guild_id: u64, kind: RoleKind) -> Result<(), AppError> {
        if !GuildRoleRepository::new(self.db).delete(guild_id, kind).await? {
            return Err(AppError::NotFound(format!("No {} role is mapped", kind)));
        }

        Ok(())
    }

    /// Lists the mappings of a guild in `RoleKind::ALL` order.
    pub async fn list(&self, guild_id: u64) -> Result<Vec<RoleMapping>, AppError> {
        let mut mappings = GuildRoleRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        mappings.sort_by_key(|m| RoleKind::ALL.iter().position(|k| *k == m.kind));

        Ok(mappings)
    }

    /// Gets the mapping of one role kind, `None` if the kind is unmapped.
    pub async fn get(&self, guild_id: u64, kind: RoleKind) -> Result<Option<RoleMapping>, AppError> {
        Ok(GuildRoleRepository::new(self.db)
            .find_by_kind(guild_id, kind)
            .await?)
    }
}
