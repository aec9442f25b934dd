use super::*;

/// Tests syncing a guild from gateway data.
///
/// Expected: Ok with the guild stored
#[tokio::test]
async fn syncs_new_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuildService::new(db);
    let guild = service
        .sync_guild(&create_test_guild(42, "Warden HQ", 12))
        .await?;

    assert_eq!(guild.guild_id, 42);
    assert_eq!(guild.member_count, 12);
    assert_eq!(service.get_settings(42).await?.name, "Warden HQ");

    Ok(())
}

/// Tests reconciling stored guilds against the joined set.
///
/// Expected: Ok(1) with the left guild and its queues removed
#[tokio::test]
async fn reconcile_removes_left_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (kept, _) = factory::helpers::create_queue_with_guild(db).await?;
    let (left, _) = factory::helpers::create_queue_with_guild(db).await?;
    let kept_id = kept.guild_id.parse::<u64>().unwrap();
    let left_id = left.guild_id.parse::<u64>().unwrap();

    let service = GuildService::new(db);

    assert_eq!(service.reconcile(&[kept_id]).await?, 1);
    assert!(service.get_settings(kept_id).await.is_ok());
    assert!(service
        .get_settings(left_id)
        .await
        .is_err_and(|e| e.is_not_found()));

    Ok(())
}

/// Tests removing a guild the bot left.
///
/// Expected: Ok(true), then Ok(false)
#[tokio::test]
async fn removes_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = GuildService::new(db);

    assert!(service.remove(guild_id).await?);
    assert!(!service.remove(guild_id).await?);

    Ok(())
}
