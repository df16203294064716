use super::*;

/// Tests overwriting a balance.
///
/// Expected: Ok(EconomyUser) with the new balance persisted
#[tokio::test]
async fn overwrites_balance() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .guild_id(1)
        .balance(10)
        .fake_boosts(2)
        .build()
        .await?;
    let user_id = existing.user_id as u64;

    let repo = UserRepository::new(db);
    let updated = repo.set_balance(1, user_id, 95).await?;

    assert_eq!(updated.balance, 95);
    assert_eq!(updated.fake_boosts, 2);
    assert_eq!(repo.find(1, user_id).await?.unwrap().balance, 95);

    Ok(())
}

/// Tests overwriting the balance of a missing account.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db).set_balance(1, 2, 3).await;

    assert!(result.is_err());

    Ok(())
}
