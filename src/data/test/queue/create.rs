use super::*;

/// Tests creating a queue.
///
/// Verifies that new queues start unlocked with their schedule disabled.
///
/// Expected: Ok with queue created
#[tokio::test]
async fn creates_unlocked_queue() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let repo = QueueRepository::new(db);
    let queue = repo
        .create(CreateQueueParam {
            guild_id,
            name: "alpha".to_string(),
            description: Some("First queue".to_string()),
        })
        .await?;

    assert_eq!(queue.guild_id, guild_id);
    assert_eq!(queue.name, "alpha");
    assert_eq!(queue.description.as_deref(), Some("First queue"));
    assert!(!queue.locked);
    assert!(!queue.schedule_enabled);

    let found = repo.find_by_name(guild_id, "alpha").await?;
    assert_eq!(found.map(|q| q.id), Some(queue.id));

    Ok(())
}

/// Tests that queue lookups are scoped to their guild.
///
/// Expected: Ok(None) when searching another guild for the same name
#[tokio::test]
async fn find_by_name_is_guild_scoped() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    factory::queue::QueueFactory::new(db, &guild.guild_id)
        .name("alpha")
        .build()
        .await?;

    let repo = QueueRepository::new(db);
    let result = repo
        .find_by_name(other.guild_id.parse::<u64>().unwrap(), "alpha")
        .await?;

    assert!(result.is_none());

    Ok(())
}
