use super::*;

/// Tests appending a transaction.
///
/// Expected: Ok(Transaction) with a generated id and the given amounts
#[tokio::test]
async fn appends_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transaction)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let transaction = TransactionRepository::new(db)
        .create(CreateTransactionParam {
            guild_id: 1,
            user_id: 2,
            transaction_type: "admin_set_balance".to_string(),
            item_name: "Dashboard adjustment".to_string(),
            amount_changed: -5,
            new_balance: 15,
        })
        .await?;

    assert!(transaction.id > 0);
    assert_eq!(transaction.amount_changed, -5);
    assert_eq!(transaction.new_balance, 15);
    assert_eq!(transaction.transaction_type, "admin_set_balance");

    Ok(())
}
