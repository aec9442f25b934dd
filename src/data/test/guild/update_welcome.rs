use super::*;

/// Tests setting the welcome message of a guild.
///
/// Expected: Ok(Some) with both fields stored
#[tokio::test]
async fn sets_welcome_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let updated = repo
        .update_welcome(
            guild_id,
            Some("Welcome!".to_string()),
            Some("Say hello in #general".to_string()),
        )
        .await?
        .expect("guild should exist");

    assert_eq!(updated.welcome_title.as_deref(), Some("Welcome!"));
    assert_eq!(updated.welcome_text.as_deref(), Some("Say hello in #general"));

    Ok(())
}

/// Tests clearing the welcome message by passing `None` for both fields.
///
/// Expected: Ok(Some) with both fields empty
#[tokio::test]
async fn clears_welcome_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::discord_guild::DiscordGuildFactory::new(db)
        .welcome(Some("Hi".to_string()), Some("Text".to_string()))
        .build()
        .await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let updated = repo
        .update_welcome(guild_id, None, None)
        .await?
        .expect("guild should exist");

    assert!(updated.welcome_title.is_none());
    assert!(updated.welcome_text.is_none());

    Ok(())
}

/// Tests updating the welcome message of an unknown guild.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordGuildRepository::new(db);
    let result = repo
        .update_welcome(999, Some("Hi".to_string()), None)
        .await?;

    assert!(result.is_none());

    Ok(())
}
