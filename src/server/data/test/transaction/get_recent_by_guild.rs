use super::*;

/// Tests reading recent transactions newest first with a limit.
///
/// Expected: Ok(vec) of the two newest rows of the guild
#[tokio::test]
async fn returns_newest_first_with_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let oldest = factory::transaction::TransactionFactory::new(db)
        .guild_id(1)
        .timestamp(now - Duration::hours(2))
        .build()
        .await?;
    let newest = factory::transaction::TransactionFactory::new(db)
        .guild_id(1)
        .timestamp(now)
        .build()
        .await?;
    let middle = factory::transaction::TransactionFactory::new(db)
        .guild_id(1)
        .timestamp(now - Duration::hours(1))
        .build()
        .await?;
    factory::create_transaction(db, 2).await?;

    let transactions = TransactionRepository::new(db)
        .get_recent_by_guild(1, 2)
        .await?;

    let ids: Vec<i32> = transactions.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);
    assert!(!ids.contains(&oldest.id));

    Ok(())
}
