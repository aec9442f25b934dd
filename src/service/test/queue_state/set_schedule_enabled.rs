use super::*;

/// Tests enabling the schedule of an unknown queue.
///
/// Expected: Err(QueueError::NotFound)
#[tokio::test]
async fn fails_for_unknown_queue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_alpha(db, false, false).await?;

    let service = QueueStateService::new(db);
    let result = service.set_schedule_enabled(1, "missing", true).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::NotFound { ref name })) if name == "missing"
    ));

    Ok(())
}

/// Tests that queue lookups do not cross guilds.
///
/// Expected: Err(QueueError::NotFound) for the same name in another guild
#[tokio::test]
async fn fails_for_queue_of_other_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_alpha(db, false, false).await?;
    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("2")
        .build()
        .await?;

    let service = QueueStateService::new(db);
    let result = service.set_schedule_enabled(2, "alpha", true).await;

    assert!(result.is_err_and(|e| e.is_not_found()));

    Ok(())
}

/// Tests that enabling the schedule twice leaves the same state as once.
///
/// Expected: Ok both times with schedule_enabled = true
#[tokio::test]
async fn enabling_twice_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let queue = seed_alpha(db, false, false).await?;
    let service = QueueStateService::new(db);

    service.set_schedule_enabled(1, "alpha", true).await?;
    let once = stored_flags(db, queue.id).await?;

    service.set_schedule_enabled(1, "alpha", true).await?;
    let twice = stored_flags(db, queue.id).await?;

    assert_eq!(once, (false, true));
    assert_eq!(once, twice);

    Ok(())
}

/// Tests that a locked queue cannot have its schedule enabled.
///
/// Expected: Err(QueueError::Locked) with state unchanged
#[tokio::test]
async fn refuses_to_enable_locked_queue() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let queue = seed_alpha(db, true, false).await?;
    let service = QueueStateService::new(db);

    let result = service.set_schedule_enabled(1, "alpha", true).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::Locked { .. }))
    ));
    assert_eq!(stored_flags(db, queue.id).await?, (true, false));

    Ok(())
}

/// Tests that disabling the schedule of a locked queue is allowed.
///
/// Expected: Ok with state unchanged
#[tokio::test]
async fn disabling_locked_queue_succeeds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let queue = seed_alpha(db, true, false).await?;
    let service = QueueStateService::new(db);

    service.set_schedule_enabled(1, "alpha", false).await?;

    assert_eq!(stored_flags(db, queue.id).await?, (true, false));

    Ok(())
}

/// Tests resolving a disable that matched no row because the queue was deleted.
///
/// Expected: Err(QueueError::NotFound), not Locked
#[tokio::test]
async fn refused_disable_of_deleted_queue_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let queue = seed_alpha(db, false, true).await?;
    entity::prelude::Queue::delete_by_id(queue.id).exec(db).await?;

    let service = QueueStateService::new(db);
    let result = service.refused_schedule_write(1, "alpha", false).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::NotFound { ref name })) if name == "alpha"
    ));

    Ok(())
}

/// Tests resolving an enable that matched no row because the queue was locked.
///
/// Expected: Err(QueueError::Locked)
#[tokio::test]
async fn refused_enable_of_locked_queue_is_locked() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_alpha(db, true, false).await?;

    let service = QueueStateService::new(db);
    let result = service.refused_schedule_write(1, "alpha", true).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::Locked { .. }))
    ));

    Ok(())
}

/// Tests resolving a refused write when the queue already has the requested state.
///
/// Expected: Ok(())
#[tokio::test]
async fn refused_write_already_applied_is_ok() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    seed_alpha(db, false, true).await?;

    let service = QueueStateService::new(db);

    assert!(service.refused_schedule_write(1, "alpha", true).await.is_ok());

    Ok(())
}
