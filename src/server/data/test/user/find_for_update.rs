use super::*;
use sea_orm::TransactionTrait;

/// Tests reading an existing account under a row lock inside a transaction.
///
/// Expected: Ok(Some(EconomyUser)) with the stored balance
#[tokio::test]
async fn finds_existing_user_in_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::user::UserFactory::new(db)
        .guild_id(1)
        .balance(75)
        .build()
        .await?;

    let txn = db.begin().await?;
    let user = UserRepository::new(&txn)
        .find_for_update(1, existing.user_id as u64)
        .await?;
    txn.commit().await?;

    assert_eq!(user.map(|user| user.balance), Some(75));

    Ok(())
}

/// Tests that a missing account is not created by the locked read.
///
/// Expected: Ok(None) and no row afterwards
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);

    assert!(repo.find_for_update(1, 2).await?.is_none());
    assert!(repo.find(1, 2).await?.is_none());

    Ok(())
}
