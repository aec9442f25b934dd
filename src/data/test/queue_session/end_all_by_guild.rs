use super::*;

/// Tests ending every active session in a guild.
///
/// Verifies that sessions of other guilds stay active and that the returned count
/// only includes sessions that were active.
///
/// Expected: Ok(2), then Ok(0) on a second call
#[tokio::test]
async fn ends_active_sessions_in_guild_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_queue_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, queue) = factory::helpers::create_queue_with_guild(db).await?;
    let (other_guild, other_queue) = factory::helpers::create_queue_with_guild(db).await?;
    factory::helpers::create_active_sessions(db, &queue, 2).await?;
    factory::queue_session::QueueSessionFactory::new(db, &queue)
        .ended_at(Some(Utc::now()))
        .build()
        .await?;
    factory::create_session(db, &other_queue).await?;

    let guild_id = guild.guild_id.parse::<u64>().unwrap();
    let repo = QueueSessionRepository::new(db);

    assert_eq!(repo.end_all_by_guild(guild_id).await?, 2);
    assert_eq!(repo.end_all_by_guild(guild_id).await?, 0);
    assert_eq!(count_active_in_guild(db, guild_id).await?, 0);
    assert_eq!(
        count_active_in_guild(db, other_guild.guild_id.parse::<u64>().unwrap()).await?,
        1
    );

    Ok(())
}
