use super::*;

/// Tests replacing a stored configuration.
///
/// Verifies that the document and both legacy columns are overwritten.
///
/// Expected: Ok(GuildConfig) with new values persisted
#[tokio::test]
async fn replaces_document_and_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_guild_config(db).await?;
    let guild_id = created.guild_id as u64;

    let repo = GuildConfigRepository::new(db);
    let updated = repo
        .update(UpdateGuildConfigParam {
            guild_id,
            shop_channel_id: Some(1),
            leaderboard_thread_id: Some(2),
            config_data: json!({ "SHOP_CHANNEL_ID": 1, "LEADERBOARD_THREAD_ID": 2 }),
        })
        .await?;

    assert_eq!(updated.shop_channel_id, Some(1));

    let stored = repo.find_by_guild_id(guild_id).await?.unwrap();
    assert_eq!(stored.leaderboard_thread_id, Some(2));
    assert_eq!(
        stored.config_data,
        json!({ "SHOP_CHANNEL_ID": 1, "LEADERBOARD_THREAD_ID": 2 })
    );

    Ok(())
}

/// Tests updating a guild without a configuration row.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_config() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuildConfigRepository::new(db)
        .update(UpdateGuildConfigParam {
            guild_id: 7,
            shop_channel_id: None,
            leaderboard_thread_id: None,
            config_data: json!({}),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
