use super::*;

/// Tests issuing a token with a use limit and lifetime.
///
/// Expected: Ok with a generated code, zero uses and an expiry in the future
#[tokio::test]
async fn creates_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();

    let service = TokenService::new(db);
    let token = service
        .create(CreateTokenParam {
            guild_id,
            kind: TokenKind::Invite,
            created_by: 5,
            max_uses: Some(3),
            ttl: Some(Duration::hours(24)),
        })
        .await?;

    assert_eq!(token.code.len(), TOKEN_CODE_LENGTH);
    assert_eq!(token.uses, 0);
    assert_eq!(token.max_uses, Some(3));
    assert!(token.expires_at.is_some_and(|at| at > Utc::now()));
    assert_eq!(service.list(guild_id).await?.len(), 1);

    Ok(())
}

/// Tests that a use limit of zero is rejected.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_zero_max_uses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let service = TokenService::new(db);
    let result = service
        .create(CreateTokenParam {
            guild_id: guild.guild_id.parse::<u64>().unwrap(),
            kind: TokenKind::Invite,
            created_by: 5,
            max_uses: Some(0),
            ttl: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that a use limit beyond what the column stores is rejected rather than wrapped.
///
/// Expected: Err(AppError::BadRequest) for MAX_TOKEN_USES + 1; Ok and redeemable at the bound
#[tokio::test]
async fn bounds_max_uses() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_guild_role(db, &guild.guild_id, "member").await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();
    let param = |max_uses| CreateTokenParam {
        guild_id,
        kind: TokenKind::Invite,
        created_by: 5,
        max_uses: Some(max_uses),
        ttl: None,
    };

    let service = TokenService::new(db);
    let result = service.create(param(MAX_TOKEN_USES + 1)).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.list(guild_id).await?.is_empty());

    let token = service.create(param(MAX_TOKEN_USES)).await?;
    assert_eq!(token.max_uses, Some(MAX_TOKEN_USES));
    let (redeemed, _) = service.redeem(guild_id, &token.code).await?;
    assert_eq!(redeemed.uses, 1);

    Ok(())
}

/// Tests revoking tokens and purging expired ones.
///
/// Expected: revoked and expired tokens are gone, the unexpired one stays
#[tokio::test]
async fn revokes_and_purges() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id.parse::<u64>().unwrap();
    let revoked = factory::create_token(db, &guild.guild_id).await?;
    factory::guild_token::GuildTokenFactory::new(db, &guild.guild_id)
        .expires_at(Some(Utc::now() - Duration::minutes(5)))
        .build()
        .await?;
    factory::create_token(db, &guild.guild_id).await?;

    let service = TokenService::new(db);

    service.revoke(guild_id, &revoked.code).await?;
    assert!(matches!(
        service.revoke(guild_id, &revoked.code).await,
        Err(AppError::TokenErr(TokenError::NotFound))
    ));
    assert_eq!(service.purge_expired().await?, 1);
    assert_eq!(service.list(guild_id).await?.len(), 1);

    Ok(())
}
