use super::*;
use sea_orm::PaginatorTrait;

/// Tests upserting a new Discord guild.
///
/// Verifies that the repository creates a guild record with the ID, name and
/// member count taken from a Serenity Guild object.
///
/// Expected: Ok with guild created
#[tokio::test]
async fn upserts_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = create_test_guild(123456789, "Test Guild", 42);

    let repo = DiscordGuildRepository::new(db);
    let upserted = repo.upsert(UpsertGuildParam::from(&guild)).await?;

    assert_eq!(upserted.guild_id, 123456789);
    assert_eq!(upserted.name, "Test Guild");
    assert_eq!(upserted.member_count, 42);
    assert!(upserted.welcome_text.is_none());

    let db_guild = entity::prelude::DiscordGuild::find()
        .filter(entity::discord_guild::Column::GuildId.eq("123456789"))
        .one(db)
        .await?;
    assert!(db_guild.is_some());

    Ok(())
}

/// Tests upserting updates an existing guild.
///
/// Verifies that an upsert for a known guild ID refreshes the name and member
/// count without creating a duplicate and without touching the welcome message.
///
/// Expected: Ok with guild updated and welcome settings kept
#[tokio::test]
async fn updates_existing_guild_and_keeps_welcome() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordGuild)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_guild::DiscordGuildFactory::new(db)
        .guild_id("123456789")
        .name("Old Name")
        .welcome(Some("Hi".to_string()), Some("Read the rules".to_string()))
        .build()
        .await?;

    let repo = DiscordGuildRepository::new(db);
    let upserted = repo
        .upsert(UpsertGuildParam {
            guild_id: 123456789,
            name: "New Name".to_string(),
            member_count: 7,
        })
        .await?;

    assert_eq!(upserted.name, "New Name");
    assert_eq!(upserted.member_count, 7);
    assert_eq!(upserted.welcome_title.as_deref(), Some("Hi"));
    assert_eq!(upserted.welcome_text.as_deref(), Some("Read the rules"));

    let count = entity::prelude::DiscordGuild::find()
        .filter(entity::discord_guild::Column::GuildId.eq("123456789"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}
