use super::*;
use chrono::Utc;

/// Tests terminating sessions in a guild that has none.
///
/// Expected: Ok(0) with the queue state unchanged
#[tokio::test]
async fn returns_zero_without_sessions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let queue = seed_alpha(db, false, true).await?;
    let service = QueueStateService::new(db);

    assert_eq!(service.terminate_all_sessions(1).await?, 0);
    assert_eq!(stored_flags(db, queue.id).await?, (false, true));

    Ok(())
}

/// Tests terminating three active sessions in queue "alpha".
///
/// Already-ended sessions must not be counted.
///
/// Expected: Ok(3), then Ok(0) on the next call
#[tokio::test]
async fn ends_all_active_sessions_once() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let queue = seed_alpha(db, false, false).await?;
    factory::helpers::create_active_sessions(db, &queue, 3).await?;
    factory::queue_session::QueueSessionFactory::new(db, &queue)
        .ended_at(Some(Utc::now()))
        .build()
        .await?;

    let service = QueueStateService::new(db);

    assert_eq!(service.terminate_all_sessions(1).await?, 3);
    assert_eq!(service.terminate_all_sessions(1).await?, 0);

    Ok(())
}

/// Tests terminating sessions of a guild the bot does not know.
///
/// Expected: Err(QueueError::GuildNotFound)
#[tokio::test]
async fn fails_for_unknown_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = QueueStateService::new(db);
    let result = service.terminate_all_sessions(404).await;

    assert!(matches!(
        result,
        Err(AppError::QueueErr(QueueError::GuildNotFound { guild_id: 404 }))
    ));

    Ok(())
}
