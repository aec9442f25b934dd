use super::*;

/// Tests ending one user's sessions across the queues of a guild.
///
/// Expected: Ok(2) with the other user's session still active
#[tokio::test]
async fn ends_sessions_of_user_across_queues() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, queue) = factory::helpers::create_queue_with_guild(db).await?;
    let second = factory::create_queue(db, &guild.guild_id).await?;
    for q in [&queue, &second] {
        factory::queue_session::QueueSessionFactory::new(db, q)
            .user_id("42")
            .build()
            .await?;
    }
    factory::queue_session::QueueSessionFactory::new(db, &queue)
        .user_id("43")
        .build()
        .await?;

    let guild_id = guild.guild_id.parse::<u64>().unwrap();
    let repo = QueueSessionRepository::new(db);

    assert_eq!(repo.end_all_by_user(guild_id, 42).await?, 2);
    assert!(repo.find_active(queue.id, 43).await?.is_some());
    assert_eq!(count_active_in_guild(db, guild_id).await?, 1);

    Ok(())
}

/// Tests ending a user's session in a single queue.
///
/// Expected: Ok(1) with the session in the other queue left active
#[tokio::test]
async fn ends_session_in_one_queue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, queue) = factory::helpers::create_queue_with_guild(db).await?;
    let second = factory::create_queue(db, &guild.guild_id).await?;
    for q in [&queue, &second] {
        factory::queue_session::QueueSessionFactory::new(db, q)
            .user_id("42")
            .build()
            .await?;
    }

    let repo = QueueSessionRepository::new(db);

    assert_eq!(repo.end_for_user_in_queue(queue.id, 42).await?, 1);
    assert!(repo.find_active(queue.id, 42).await?.is_none());
    assert!(repo.find_active(second.id, 42).await?.is_some());

    Ok(())
}
