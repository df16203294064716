//! Shop role factory for creating purchasable role rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shop roles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let role = ShopRoleFactory::new(&db)
///     .guild_id(1)
///     .role_id(42)
///     .price(100)
///     .build()
///     .await?;
/// ```
pub struct ShopRoleFactory<'a> {
    db: &'a DatabaseConnection,
    role_id: i64,
    guild_id: i64,
    price: i64,
    creator_id: Option<i64>,
}

impl<'a> ShopRoleFactory<'a> {
    /// Creates a new ShopRoleFactory with default values.
    ///
    /// Defaults:
    /// - role_id / guild_id: auto-incremented
    /// - price: `100`
    /// - creator_id: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            role_id: next_id(),
            guild_id: next_id(),
            price: 100,
            creator_id: None,
        }
    }

    /// Sets the Discord role ID.
    pub fn role_id(mut self, role_id: i64) -> Self {
        self.role_id = role_id;
        self
    }

    /// Sets the owning guild ID.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the price in currency units.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Sets the member who created the role.
    pub fn creator_id(mut self, creator_id: Option<i64>) -> Self {
        self.creator_id = creator_id;
        self
    }

    /// Builds and inserts the shop role into the database.
    pub async fn build(self) -> Result<entity::shop_role::Model, DbErr> {
        entity::shop_role::ActiveModel {
            role_id: ActiveValue::Set(self.role_id),
            guild_id: ActiveValue::Set(self.guild_id),
            price: ActiveValue::Set(self.price),
            creator_id: ActiveValue::Set(self.creator_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a shop role in the given guild with default values.
pub async fn create_shop_role(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::shop_role::Model, DbErr> {
    ShopRoleFactory::new(db).guild_id(guild_id).build().await
}
