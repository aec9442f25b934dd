use super::*;

/// Tests listing the queues of a guild.
///
/// Verifies queues come back ordered by name and queues of other guilds are excluded.
///
/// Expected: Ok with two queues in name order
#[tokio::test]
async fn lists_guild_queues_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    factory::queue::QueueFactory::new(db, &guild.guild_id)
        .name("zulu")
        .build()
        .await?;
    factory::queue::QueueFactory::new(db, &guild.guild_id)
        .name("alpha")
        .build()
        .await?;
    factory::create_queue(db, &other.guild_id).await?;

    let repo = QueueRepository::new(db);
    let queues = repo
        .get_by_guild_id(guild.guild_id.parse::<u64>().unwrap())
        .await?;

    let names: Vec<&str> = queues.iter().map(|q| q.name.as_str()).collect();
    assert_eq!(names, vec!["alpha", "zulu"]);

    Ok(())
}
