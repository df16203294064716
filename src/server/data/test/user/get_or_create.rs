use super::*;

/// Tests that a missing account is created with a zero balance.
///
/// Expected: Ok(EconomyUser) with balance 0, persisted
#[tokio::test]
async fn creates_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.get_or_create(1, 2).await?;

    assert_eq!(user.balance, 0);
    assert_eq!(user.fake_boosts, 0);
    assert!(repo.find(1, 2).await?.is_some());

    Ok(())
}

/// Tests that an existing account is returned unchanged.
///
/// Expected: Ok(EconomyUser) with the stored balance
#[tokio::test]
async fn returns_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .guild_id(1)
        .balance(40)
        .build()
        .await?;

    let user = UserRepository::new(db)
        .get_or_create(1, existing.user_id as u64)
        .await?;

    assert_eq!(user.balance, 40);

    Ok(())
}
