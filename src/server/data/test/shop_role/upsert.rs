use super::*;

/// Tests inserting a new shop role.
///
/// Expected: Ok(ShopRole) with the given price and creator
#[tokio::test]
async fn inserts_new_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let role = ShopRoleRepository::new(db)
        .upsert(UpsertShopRoleParam {
            role_id: 10,
            guild_id: 1,
            price: 500,
            creator_id: None,
        })
        .await?;

    assert_eq!(role.role_id, 10);
    assert_eq!(role.price, 500);
    assert_eq!(role.creator_id, None);

    Ok(())
}

/// Tests that a conflicting upsert only changes the price.
///
/// Verifies that the member who created the role stays recorded when an admin
/// edits its price.
///
/// Expected: Ok(ShopRole) with new price and original creator
#[tokio::test]
async fn updates_price_and_keeps_creator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::shop_role::ShopRoleFactory::new(db)
        .role_id(10)
        .guild_id(1)
        .price(100)
        .creator_id(Some(77))
        .build()
        .await?;

    let repo = ShopRoleRepository::new(db);
    let role = repo
        .upsert(UpsertShopRoleParam {
            role_id: 10,
            guild_id: 1,
            price: 250,
            creator_id: None,
        })
        .await?;

    assert_eq!(role.price, 250);
    assert_eq!(role.creator_id, Some(77));
    assert_eq!(repo.get_by_guild_id(1).await?.len(), 1);

    Ok(())
}
