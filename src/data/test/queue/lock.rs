use super::*;

/// Tests that locking a queue also disables its schedule.
///
/// Expected: Ok with locked = true and schedule_enabled = false
#[tokio::test]
async fn lock_disables_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let queue = factory::queue::QueueFactory::new(db, &guild.guild_id)
        .schedule_enabled(true)
        .build()
        .await?;

    let repo = QueueRepository::new(db);
    repo.lock(queue.id).await?;

    let stored = entity::prelude::Queue::find_by_id(queue.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.locked);
    assert!(!stored.schedule_enabled);

    Ok(())
}

/// Tests that unlocking leaves the schedule flag unchanged.
///
/// Expected: Ok with locked = false and schedule still disabled
#[tokio::test]
async fn unlock_keeps_schedule_disabled() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let queue = factory::queue::QueueFactory::new(db, &guild.guild_id)
        .locked(true)
        .build()
        .await?;

    let repo = QueueRepository::new(db);
    repo.unlock(queue.id).await?;

    let stored = entity::prelude::Queue::find_by_id(queue.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.locked);
    assert!(!stored.schedule_enabled);

    Ok(())
}
