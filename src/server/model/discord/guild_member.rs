use serenity::all::Member;

use crate::model::member::MemberDto;

/// Guild member from `GET /guilds/{id}/members`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscordMember {
    pub user_id: u64,
    pub username: String,
    /// Guild nickname, falling back to global name, then username.
    pub display_name: String,
    pub avatar_url: Option<String>,
}

impl From<&Member> for DiscordMember {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id.get(),
            username: member.user.name.clone(),
            display_name: member.display_name().to_string(),
            avatar_url: member.avatar_url().or_else(|| member.user.avatar_url()),
        }
    }
}

impl DiscordMember {
    /// Converts to a DTO together with the member's economy balance, if any.
    pub fn into_dto(self, balance: Option<i64>) -> MemberDto {
        MemberDto {
            user_id: self.user_id,
            username: self.username,
            display_name: self.display_name,
            avatar_url: self.avatar_url,
            balance,
        }
    }
}
