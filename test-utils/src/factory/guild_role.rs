//! Role mapping factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role mapping row for a guild.
///
/// # Arguments
/// - `guild_id` - Guild the mapping belongs to
/// - `kind` - Stored kind value (`"admin"`, `"moderator"`, `"member"`, `"verified"`)
///
/// # Returns
/// - `Ok(entity::guild_role::Model)` - Created mapping with a generated role ID
/// - `Err(DbErr)` - Database error during insert
pub async fn create_guild_role(
    db: &DatabaseConnection,
    guild_id: &str,
    kind: &str,
) -> Result<entity::guild_role::Model, DbErr> {
    entity::guild_role::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        kind: ActiveValue::Set(kind.to_string()),
        role_id: ActiveValue::Set(next_id().to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
