use super::*;

/// Tests removing a role mapping.
///
/// Expected: Ok(true) the first time, Ok(false) once it is gone
#[tokio::test]
async fn removes_mapping() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_guild_role(db, &guild.guild_id, "moderator").await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let repo = GuildRoleRepository::new(db);

    assert!(repo.delete(guild_id, RoleKind::Moderator).await?);
    assert!(!repo.delete(guild_id, RoleKind::Moderator).await?);
    assert!(repo.get_by_guild_id(guild_id).await?.is_empty());

    Ok(())
}
