use super::*;

/// Tests finding a member's custom role.
///
/// Expected: Ok(Some(CustomRole))
#[tokio::test]
async fn finds_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::custom_role::CustomRoleFactory::new(db)
        .guild_id(1)
        .role_name("Sparkle")
        .build()
        .await?;

    let repo = CustomRoleRepository::new(db);
    let role = repo.find(1, created.user_id as u64).await?.unwrap();

    assert_eq!(role.role_name, "Sparkle");
    assert_eq!(repo.get_by_guild_id(1).await?.len(), 1);
    assert!(repo.find(2, created.user_id as u64).await?.is_none());

    Ok(())
}
