//! Guild member views combining Discord data with economy state.

use crate::{
    model::member::{MemberDetailDto, MemberPageDto},
    server::model::{
        custom_role::CustomRole,
        discord::{DiscordMember, DiscordProfile},
        user::EconomyUser,
    },
};

/// One page of a guild's member list with balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberPage {
    /// Members on this page with their balance, `None` when they have no account.
    pub members: Vec<(DiscordMember, Option<i64>)>,
    /// Members matching the search across all pages.
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

impl MemberPage {
    pub fn into_dto(self) -> MemberPageDto {
        let total_pages = self.total.div_ceil(self.per_page.max(1));
        MemberPageDto {
            members: self
                .members
                .into_iter()
                .map(|(member, balance)| member.into_dto(balance))
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages,
        }
    }
}

/// A single member's economy record, profile and custom role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDetail {
    pub user: EconomyUser,
    pub profile: Option<DiscordProfile>,
    pub custom_role: Option<CustomRole>,
}

impl MemberDetail {
    pub fn into_dto(self) -> MemberDetailDto {
        MemberDetailDto {
            user_id: self.user.user_id,
            guild_id: self.user.guild_id,
            display_name: self.profile.as_ref().map(|p| p.display_name.clone()),
            avatar_url: self.profile.and_then(|p| p.avatar_url),
            balance: self.user.balance,
            fake_boosts: self.user.fake_boosts,
            custom_role: self.custom_role.map(CustomRole::into_dto),
        }
    }
}
