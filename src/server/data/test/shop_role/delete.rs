use super::*;

/// Tests deleting a tracked shop role.
///
/// Expected: Ok(()) and the role no longer listed
#[tokio::test]
async fn deletes_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_shop_role(db, 1).await?;
    let removed = factory::create_shop_role(db, 1).await?;

    let repo = ShopRoleRepository::new(db);
    repo.delete(1, removed.role_id as u64).await?;

    let roles = repo.get_by_guild_id(1).await?;
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].role_id, kept.role_id as u64);

    Ok(())
}

/// Tests that deletion is scoped to the guild.
///
/// Verifies that a role id belonging to another guild is left untouched.
///
/// Expected: Ok(()) with the other guild's role intact
#[tokio::test]
async fn ignores_role_of_other_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ShopRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let other = factory::create_shop_role(db, 2).await?;

    let repo = ShopRoleRepository::new(db);
    repo.delete(1, other.role_id as u64).await?;

    assert_eq!(repo.get_by_guild_id(2).await?.len(), 1);

    Ok(())
}
