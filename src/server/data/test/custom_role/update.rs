use super::*;

fn param(guild_id: u64, user_id: u64) -> UpdateCustomRoleParam {
    UpdateCustomRoleParam {
        user_id,
        guild_id,
        role_name: "Renamed".to_string(),
        role_color: "#00FF00".to_string(),
        role_style: Some("gradient".to_string()),
        gradient_color_1: Some("#000000".to_string()),
        gradient_color_2: Some("#FFFFFF".to_string()),
    }
}

/// Tests editing an existing custom role.
///
/// Verifies that the display fields change and the Discord role id is kept.
///
/// Expected: Ok(Some(CustomRole)) with new fields
#[tokio::test]
async fn updates_existing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_custom_role(db, 1).await?;

    let updated = CustomRoleRepository::new(db)
        .update(param(1, created.user_id as u64))
        .await?
        .unwrap();

    assert_eq!(updated.role_name, "Renamed");
    assert_eq!(updated.role_color, "#00FF00");
    assert_eq!(updated.role_style.as_deref(), Some("gradient"));
    assert_eq!(updated.role_id, created.role_id as u64);

    Ok(())
}

/// Tests editing a member without a custom role.
///
/// Expected: Ok(None) and no row created
#[tokio::test]
async fn returns_none_for_missing_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::CustomRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomRoleRepository::new(db);
    let updated = repo.update(param(1, 2)).await?;

    assert!(updated.is_none());
    assert!(repo.get_by_guild_id(1).await?.is_empty());

    Ok(())
}
