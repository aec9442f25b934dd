use super::*;
use sea_orm::PaginatorTrait;

/// Tests that deleting a guild cascades to its queues and sessions.
///
/// Expected: Ok(true) and no queue or session rows left
#[tokio::test]
async fn deletes_guild_and_cascades() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, queue) = factory::helpers::create_queue_with_guild(db).await?;
    factory::helpers::create_active_sessions(db, &queue, 2).await?;

    let repo = DiscordGuildRepository::new(db);
    let deleted = repo.delete(guild.guild_id.parse::<u64>().unwrap()).await?;

    assert!(deleted);
    assert_eq!(entity::prelude::Queue::find().count(db).await?, 0);
    assert_eq!(entity::prelude::QueueSession::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a guild that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);

    assert!(!repo.delete(404).await?);

    Ok(())
}
