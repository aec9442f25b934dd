use super::*;

/// Tests listing queues with their active session counts.
///
/// Expected: Ok with summaries in name order
#[tokio::test]
async fn lists_summaries_in_name_order() -> Result<(), AppError> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let beta = factory::queue::QueueFactory::new(db, &guild.guild_id)
        .name("beta")
        .build()
        .await?;
    factory::queue::QueueFactory::new(db, &guild.guild_id)
        .name("alpha")
        .build()
        .await?;
    factory::helpers::create_active_sessions(db, &beta, 2).await?;

    let service = QueueService::new(db);
    let summaries = service
        .list(guild.guild_id.parse::<u64>().unwrap())
        .await?;

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].name, "alpha");
    assert_eq!(summaries[0].active_sessions, 0);
    assert_eq!(summaries[1].name, "beta");
    assert_eq!(summaries[1].active_sessions, 2);

    Ok(())
}
