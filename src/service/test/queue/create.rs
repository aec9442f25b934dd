use super::*;

/// Tests creating a queue with surrounding whitespace in its name.
///
/// Expected: Ok with the trimmed name stored
#[tokio::test]
async fn creates_queue_with_trimmed_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = QueueService::new(db);
    let queue = service.create(param(guild_id, "  alpha  ")).await?;

    assert_eq!(queue.name, "alpha");
    assert!(!queue.locked);

    Ok(())
}

/// Tests that queue names are unique within a guild.
///
/// Expected: Err(QueueError::AlreadyExists) for the second create
#[tokio::test]
async fn rejects_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = QueueService::new(db);
    service.create(param(guild_id, "alpha")).await?;
    let result = service.create(param(guild_id, "alpha")).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::AlreadyExists { .. }))
    ));

    Ok(())
}

/// Tests that the same name may be used in two guilds.
///
/// Expected: Ok for both creates
#[tokio::test]
async fn allows_same_name_in_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_guild(db).await?;
    let second = factory::create_guild(db).await?;

    let service = QueueService::new(db);
    service
        .create(param(first.guild_id.parse::<u64>().unwrap(), "alpha"))
        .await?;
    service
        .create(param(second.guild_id.parse::<u64>().unwrap(), "alpha"))
        .await?;

    Ok(())
}

/// Tests creating a queue in a guild the bot does not know.
///
/// Expected: Err(QueueError::GuildNotFound)
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = QueueService::new(db);
    let result = service.create(param(404, "alpha")).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::GuildNotFound { .. }))
    ));

    Ok(())
}

/// Tests deleting a queue by name.
///
/// Expected: Ok, then Err(QueueError::NotFound) on a second delete
#[tokio::test]
async fn deletes_queue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = QueueService::new(db);
    service.create(param(guild_id, "alpha")).await?;

    service.delete(guild_id, "alpha").await?;
    let result = service.delete(guild_id, "alpha").await;

    assert!(result.is_err_and(|e| e.is_not_found()));

    Ok(())
}
