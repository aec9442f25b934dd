use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

use crate::model::role::{RoleKind, RoleMapping};

pub struct GuildRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Maps a Discord role to a role kind, replacing any previous mapping of that kind.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    /// - `kind` - Purpose the role is used for
    /// - `role_id` - Discord role ID
    ///
    /// # Returns
    /// - `Ok(RoleMapping)` - The stored mapping
    /// - `Err(DbErr)` - Database error during lookup, insert or update
    pub async fn upsert(
        &self,
        guild_id: u64,
        kind: RoleKind,
        role_id: u64,
    ) -> Result<RoleMapping, DbErr> {
        let existing = entity::prelude::GuildRole::find()
            .filter(entity::guild_role::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_role::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?;

        let entity = match existing {
            Some(existing) => {
                let mut active_model: entity::guild_role::ActiveModel = existing.into();
                active_model.role_id = ActiveValue::Set(role_id.to_string());
                active_model.update(self.db).await?
            }
            None => {
                entity::guild_role::ActiveModel {
                    guild_id: ActiveValue::Set(guild_id.to_string()),
                    kind: ActiveValue::Set(kind.as_str().to_string()),
                    role_id: ActiveValue::Set(role_id.to_string()),
                    ..Default::default()
                }
                .insert(self.db)
                .await?
            }
        };

        RoleMapping::from_entity(entity)
    }

    pub async fn find_by_kind(
        &self,
        guild_id: u64,
        kind: RoleKind,
    ) -> Result<Option<RoleMapping>, DbErr> {
        entity::prelude::GuildRole::find()
            .filter(entity::guild_role::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_role::Column::Kind.eq(kind.as_str()))
            .one(self.db)
            .await?
            .map(RoleMapping::from_entity)
            .transpose()
    }

    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Vec<RoleMapping>, DbErr> {
        entity::prelude::GuildRole::find()
            .filter(entity::guild_role::Column::GuildId.eq(guild_id.to_string()))
            .all(self.db)
            .await?
            .into_iter()
            .map(RoleMapping::from_entity)
            .collect()
    }

    /// Removes the mapping of a role kind
    ///
    /// # Returns
    /// - `Ok(true)` - Mapping removed
    /// - `Ok(false)` - Kind was not mapped
    pub async fn delete(&self, guild_id: u64, kind: RoleKind) -> Result<bool, DbErr> {
        let result = entity::prelude::GuildRole::delete_many()
            .filter(entity::guild_role::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::guild_role::Column::Kind.eq(kind.as_str()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
