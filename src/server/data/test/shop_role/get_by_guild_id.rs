use super::*;

/// Tests that only the requested guild's roles are returned.
///
/// Expected: Ok(vec) containing the two roles of the first guild
#[tokio::test]
async fn returns_roles_of_guild_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_shop_role(db, 1).await?;
    let second = factory::create_shop_role(db, 1).await?;
    factory::create_shop_role(db, 2).await?;

    let roles = ShopRoleRepository::new(db).get_by_guild_id(1).await?;

    let ids: Vec<u64> = roles.iter().map(|r| r.role_id).collect();
    assert_eq!(ids, vec![first.role_id as u64, second.role_id as u64]);
    assert!(roles.iter().all(|r| r.guild_id == 1));

    Ok(())
}
