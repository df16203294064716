use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::{
        discord::DiscordMember,
        member::{MemberDetail, MemberPage},
    },
    service::{cache::ProfileCache, custom_role::CustomRoleDirectory, discord::DiscordApi},
};

/// Largest page the member list serves.
pub const MAX_MEMBERS_PER_PAGE: u64 = 100;

pub struct MemberService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordApi,
    cache: &'a ProfileCache,
    custom_roles: &'a dyn CustomRoleDirectory,
}

impl<'a> MemberService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        discord: &'a dyn DiscordApi,
        cache: &'a ProfileCache,
        custom_roles: &'a dyn CustomRoleDirectory,
    ) -> Self {
        Self {
            db,
            discord,
            cache,
            custom_roles,
        }
    }

    /// Lists a page of guild members with their balances.
    ///
    /// Members come from the cached Discord listing; `search` matches username or
    /// display name case-insensitively. `per_page` is clamped to
    /// `1..=MAX_MEMBERS_PER_PAGE` and pages are zero-based.
    ///
    /// # Returns
    /// - `Ok(MemberPage)` - Requested page, empty past the last page
    /// - `Err(AppError::DbErr)` - Balance lookup failed
    pub async fn list(
        &self,
        guild_id: u64,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<MemberPage, AppError> {
        let per_page = per_page.clamp(1, MAX_MEMBERS_PER_PAGE);
        let needle = search
            .map(|search| search.trim().to_lowercase())
            .filter(|search| !search.is_empty());

        let matching: Vec<DiscordMember> = self
            .cache
            .get_members(self.discord, guild_id)
            .await
            .into_iter()
            .filter(|member| match &needle {
                Some(needle) => {
                    member.username.to_lowercase().contains(needle)
                        || member.display_name.to_lowercase().contains(needle)
                }
                None => true,
            })
            .collect();

        let total = matching.len() as u64;
        let members: Vec<DiscordMember> = matching
            .into_iter()
            .skip(page.saturating_mul(per_page) as usize)
            .take(per_page as usize)
            .collect();

        let user_ids: Vec<u64> = members.iter().map(|member| member.user_id).collect();
        let balances = UserRepository::new(self.db)
            .get_balances(guild_id, &user_ids)
            .await?;

        Ok(MemberPage {
            members: members
                .into_iter()
                .map(|member| {
                    let balance = balances.get(&member.user_id).copied();
                    (member, balance)
                })
                .collect(),
            total,
            page,
            per_page,
        })
    }

    /// Loads a member's economy record, creating it on first view.
    pub async fn detail(&self, guild_id: u64, user_id: u64) -> Result<MemberDetail, AppError> {
        let user = UserRepository::new(self.db)
            .get_or_create(guild_id, user_id)
            .await?;
        let profile = self.cache.get_profile(self.discord, user_id).await;
        let custom_role = self.custom_roles.find(guild_id, user_id).await?;

        Ok(MemberDetail {
            user,
            profile,
            custom_role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::service::{
        cache::PROFILE_CACHE_TTL,
        custom_role::{DatabaseCustomRoleDirectory, DisabledCustomRoleDirectory},
        discord::fake::{FakeCall, FakeDiscordApi},
    };
    use test_utils::{builder::TestBuilder, factory};

    fn fake_with_members() -> FakeDiscordApi {
        FakeDiscordApi::new()
            .with_member(1, "Alice")
            .with_member(2, "Bob")
            .with_member(3, "Alicia")
            .with_member(4, "Carol")
    }

    /// Tests search and balance lookup.
    ///
    /// Expected: only matching members, balance present for the member with an account
    #[tokio::test]
    async fn lists_matching_members_with_balances() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::user::UserFactory::new(db)
            .guild_id(10)
            .user_id(3)
            .balance(75)
            .build()
            .await
            .unwrap();

        let discord = fake_with_members();
        let cache = ProfileCache::new(PROFILE_CACHE_TTL);
        let directory = DisabledCustomRoleDirectory;

        let page = MemberService::new(db, &discord, &cache, &directory)
            .list(10, Some(" ALI "), 0, 50)
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        let ids: Vec<(u64, Option<i64>)> = page
            .members
            .iter()
            .map(|(member, balance)| (member.user_id, *balance))
            .collect();
        assert_eq!(ids, vec![(1, None), (3, Some(75))]);
    }

    /// Tests pagination and the shared member listing.
    ///
    /// Expected: second page holds the remainder, Discord listed once
    #[tokio::test]
    async fn paginates_from_cached_listing() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let discord = fake_with_members();
        let cache = ProfileCache::new(PROFILE_CACHE_TTL);
        let directory = DisabledCustomRoleDirectory;
        let service = MemberService::new(db, &discord, &cache, &directory);

        let first = service.list(10, None, 0, 3).await.unwrap();
        let second = service.list(10, None, 1, 3).await.unwrap();
        let beyond = service.list(10, None, 5, 3).await.unwrap();

        assert_eq!(first.members.len(), 3);
        assert_eq!(second.members.len(), 1);
        assert_eq!(second.members[0].0.user_id, 4);
        assert!(beyond.members.is_empty());
        assert_eq!(beyond.total, 4);
        assert_eq!(
            discord.calls(),
            vec![FakeCall::GetMembers {
                guild_id: 10,
                limit: 1000
            }]
        );
    }

    /// Tests the first view of a member.
    ///
    /// Expected: zero-balance account created, profile and custom role attached
    #[tokio::test]
    async fn detail_creates_account() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::custom_role::CustomRoleFactory::new(db)
            .guild_id(10)
            .user_id(7)
            .build()
            .await
            .unwrap();

        let discord = FakeDiscordApi::new().with_profile(7, "Seven");
        let cache = ProfileCache::new(PROFILE_CACHE_TTL);
        let directory = DatabaseCustomRoleDirectory::new(db.clone());

        let detail = MemberService::new(db, &discord, &cache, &directory)
            .detail(10, 7)
            .await
            .unwrap();

        assert_eq!(detail.user.balance, 0);
        assert_eq!(
            detail.profile.map(|profile| profile.display_name),
            Some("Seven".to_string())
        );
        assert!(detail.custom_role.is_some());
        assert!(UserRepository::new(db).find(10, 7).await.unwrap().is_some());
    }

    /// Tests a member Discord cannot resolve.
    ///
    /// Expected: detail without profile, no error
    #[tokio::test]
    async fn detail_without_profile() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let discord = FakeDiscordApi::new();
        let cache = ProfileCache::new(PROFILE_CACHE_TTL);
        let directory = DisabledCustomRoleDirectory;

        let detail = MemberService::new(db, &discord, &cache, &directory)
            .detail(10, 8)
            .await
            .unwrap();

        assert!(detail.profile.is_none());
        assert!(detail.custom_role.is_none());
    }
}
