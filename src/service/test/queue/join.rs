use super::*;

/// Tests joining and leaving a queue.
///
/// Expected: Ok for join and leave, NotJoined for a second leave
#[tokio::test]
async fn joins_and_leaves() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, queue) = factory::helpers::create_queue_with_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = QueueService::new(db);
    let session = service.join(guild_id, &queue.name, 7).await?;
    assert!(session.ended_at.is_none());
    assert_eq!(session.queue_id, queue.id);

    service.leave(guild_id, &queue.name, 7).await?;
    let result = service.leave(guild_id, &queue.name, 7).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::NotJoined { .. }))
    ));

    Ok(())
}

/// Tests joining a queue twice.
///
/// Expected: Err(QueueError::AlreadyJoined)
#[tokio::test]
async fn rejects_second_join() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, queue) = factory::helpers::create_queue_with_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = QueueService::new(db);
    service.join(guild_id, &queue.name, 7).await?;
    let result = service.join(guild_id, &queue.name, 7).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::AlreadyJoined { .. }))
    ));

    Ok(())
}

/// Tests joining a locked queue.
///
/// Expected: Err(QueueError::Locked)
#[tokio::test]
async fn rejects_join_of_locked_queue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let queue = factory::queue::QueueFactory::new(db, &guild.guild_id)
        .locked(true)
        .build()
        .await?;

    let service = QueueService::new(db);
    let result = service
        .join(guild.guild_id.parse::<u64>().unwrap(), &queue.name, 7)
        .await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::Locked { .. }))
    ));

    Ok(())
}
