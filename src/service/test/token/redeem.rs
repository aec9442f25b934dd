use super::*;

/// Tests redeeming an invite token.
///
/// Expected: Ok with the Member mapping returned and one use recorded
#[tokio::test]
async fn grants_mapped_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let member_role = factory::create_guild_role(db, &guild.guild_id, "member").await?;
    let token = factory::create_token(db, &guild.guild_id).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = TokenService::new(db);
    let (redeemed, mapping) = service.redeem(guild_id, &token.code).await?;

    assert_eq!(redeemed.uses, 1);
    assert_eq!(mapping.kind, RoleKind::Member);
    assert_eq!(mapping.role_id.to_string(), member_role.role_id);

    Ok(())
}

/// Tests that a token stops working once its uses run out.
///
/// Expected: Ok for the only use, then Err(TokenError::Exhausted)
#[tokio::test]
async fn rejects_exhausted_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_guild_role(db, &guild.guild_id, "verified").await?;
    let token = factory::guild_token::GuildTokenFactory::new(db, &guild.guild_id)
        .kind("verification")
        .max_uses(Some(1))
        .build()
        .await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = TokenService::new(db);
    service.redeem(guild_id, &token.code).await?;
    let result = service.redeem(guild_id, &token.code).await;

    assert!(matches!(
        result,
        Err(AppError::TokenErr(TokenError::Exhausted))
    ));

    Ok(())
}

/// Tests redeeming an expired token.
///
/// Expected: Err(TokenError::Expired) with no use recorded
#[tokio::test]
async fn rejects_expired_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_guild_role(db, &guild.guild_id, "member").await?;
    let token = factory::guild_token::GuildTokenFactory::new(db, &guild.guild_id)
        .expires_at(Some(Utc::now() - Duration::seconds(1)))
        .build()
        .await?;

    let service = TokenService::new(db);
    let result = service
        .redeem(guild.guild_id.parse::<u64>().unwrap(), &token.code)
        .await;

    assert!(matches!(result, Err(AppError::TokenErr(TokenError::Expired))));

    Ok(())
}

/// Tests redeeming when the granted role kind is not mapped.
///
/// Expected: Err(TokenError::RoleNotMapped(Verified)) with no use recorded
#[tokio::test]
async fn requires_role_mapping() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let token = factory::guild_token::GuildTokenFactory::new(db, &guild.guild_id)
        .kind("verification")
        .max_uses(Some(1))
        .build()
        .await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = TokenService::new(db);
    let result = service.redeem(guild_id, &token.code).await;

    assert!(matches!(
        result,
        Err(AppError::TokenErr(TokenError::RoleNotMapped(
            RoleKind::Verified
        )))
    ));
    let stored = service.list(guild_id).await?;
    assert_eq!(stored[0].uses, 0);

    Ok(())
}

/// Tests redeeming an unknown code.
///
/// Expected: Err(TokenError::NotFound)
#[tokio::test]
async fn rejects_unknown_code() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let service = TokenService::new(db);
    let result = service
        .redeem(guild.guild_id.parse::<u64>().unwrap(), "NOPE")
        .await;

    assert!(result.is_err_and(|e| e.is_not_found()));

    Ok(())
}
