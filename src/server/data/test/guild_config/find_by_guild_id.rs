use super::*;

/// Tests reading a stored configuration.
///
/// Verifies that the document and legacy columns are returned as stored.
///
/// Expected: Ok(Some(GuildConfig))
#[tokio::test]
async fn finds_existing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::guild_config::GuildConfigFactory::new(db)
        .shop_channel_id(Some(555))
        .config_data(json!({ "CURRENCY_NAME": "coins" }))
        .build()
        .await?;

    let config = GuildConfigRepository::new(db)
        .find_by_guild_id(created.guild_id as u64)
        .await?
        .unwrap();

    assert_eq!(config.guild_id, created.guild_id as u64);
    assert_eq!(config.shop_channel_id, Some(555));
    assert_eq!(config.leaderboard_thread_id, None);
    assert_eq!(config.config_data, json!({ "CURRENCY_NAME": "coins" }));

    Ok(())
}

/// Tests reading a guild the bot never configured.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let config = GuildConfigRepository::new(db).find_by_guild_id(42).await?;

    assert!(config.is_none());

    Ok(())
}
