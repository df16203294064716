//! Economy user factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating economy users with customizable fields.
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i64,
    guild_id: i64,
    balance: i64,
    fake_boosts: i32,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - user_id / guild_id: auto-incremented
    /// - balance: `0`
    /// - fake_boosts: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            user_id: next_id(),
            guild_id: next_id(),
            balance: 0,
            fake_boosts: 0,
        }
    }

    /// Sets the Discord user ID.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.user_id = user_id;
        self
    }

    /// Sets the guild ID.
    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    /// Sets the starting balance.
    pub fn balance(mut self, balance: i64) -> Self {
        self.balance = balance;
        self
    }

    /// Sets the number of simulated boosts.
    pub fn fake_boosts(mut self, fake_boosts: i32) -> Self {
        self.fake_boosts = fake_boosts;
        self
    }

    /// Builds and inserts the user into the database.
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guild_id: ActiveValue::Set(self.guild_id),
            balance: ActiveValue::Set(self.balance),
            fake_boosts: ActiveValue::Set(self.fake_boosts),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user in the given guild with a zero balance.
pub async fn create_user(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).guild_id(guild_id).build().await
}
