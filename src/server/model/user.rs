//! Economy user domain model.

use crate::model::member::{BalanceChangeDto, UpdateBalanceDto};

/// A member's economy account within one guild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EconomyUser {
    pub user_id: u64,
    pub guild_id: u64,
    pub balance: i64,
    pub fake_boosts: i32,
}

impl EconomyUser {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            user_id: entity.user_id as u64,
            guild_id: entity.guild_id as u64,
            balance: entity.balance,
            fake_boosts: entity.fake_boosts,
        }
    }
}

/// Parameters for an admin balance correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBalanceParam {
    pub guild_id: u64,
    pub user_id: u64,
    pub new_balance: i64,
}

impl SetBalanceParam {
    pub fn from_dto(guild_id: u64, user_id: u64, dto: UpdateBalanceDto) -> Self {
        Self {
            guild_id,
            user_id,
            new_balance: dto.balance,
        }
    }
}

/// Result of a balance correction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceChange {
    pub previous_balance: i64,
    pub new_balance: i64,
    pub amount_changed: i64,
    /// Audit row written for the change; `None` for zero-delta writes.
    pub transaction_id: Option<i32>,
}

impl BalanceChange {
    pub fn into_dto(self) -> BalanceChangeDto {
        BalanceChangeDto {
            previous_balance: self.previous_balance,
            new_balance: self.new_balance,
            amount_changed: self.amount_changed,
            transaction_id: self.transaction_id,
        }
    }
}
