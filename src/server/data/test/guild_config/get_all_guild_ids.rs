use super::*;

/// Tests listing configured guilds.
///
/// Verifies that every guild with a configuration row is returned in ascending
/// id order regardless of insertion order.
///
/// Expected: Ok(vec) sorted ascending
#[tokio::test]
async fn returns_ids_in_ascending_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(300)
        .build()
        .await?;
    factory::guild_config::GuildConfigFactory::new(db)
        .guild_id(100)
        .build()
        .await?;

    let repo = GuildConfigRepository::new(db);
    let ids = repo.get_all_guild_ids().await?;

    assert_eq!(ids, vec![100, 300]);

    Ok(())
}

/// Tests listing with no configured guilds.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_without_configs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::GuildConfig)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let ids = GuildConfigRepository::new(db).get_all_guild_ids().await?;

    assert!(ids.is_empty());

    Ok(())
}
