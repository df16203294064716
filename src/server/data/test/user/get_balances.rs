use super::*;

/// Tests looking up balances for a page of members.
///
/// Verifies that members without an account are absent from the map and that
/// accounts in other guilds are not mixed in.
///
/// Expected: Ok(map) with only the member that has an account in the guild
#[tokio::test]
async fn returns_known_balances() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .user_id(5)
        .guild_id(1)
        .balance(12)
        .build()
        .await?;
    factory::user::UserFactory::new(db)
        .user_id(6)
        .guild_id(2)
        .balance(99)
        .build()
        .await?;

    let balances = UserRepository::new(db).get_balances(1, &[5, 6, 7]).await?;

    assert_eq!(balances.len(), 1);
    assert_eq!(balances.get(&5), Some(&12));

    Ok(())
}

/// Tests that an empty id list skips the query.
///
/// Expected: Ok(empty map)
#[tokio::test]
async fn returns_empty_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let balances = UserRepository::new(db).get_balances(1, &[]).await?;

    assert!(balances.is_empty());

    Ok(())
}
