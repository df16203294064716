//! In-memory cache of Discord profiles and member lists.
//!
//! Profile lookups and full member listings are slow and rate limited, so both are
//! kept for a fixed time-to-live. Expiry is checked lazily on lookup; there is no
//! background eviction. Failed fetches are never cached.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};
use tokio::sync::RwLock;

use crate::server::{
    model::discord::{DiscordMember, DiscordProfile},
    service::discord::{DiscordApi, MEMBER_FETCH_LIMIT},
};

/// Default lifetime of cached entries.
pub const PROFILE_CACHE_TTL: Duration = Duration::from_secs(300);

/// Source of the current time, replaceable in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

struct CachedEntry<T> {
    value: T,
    fetched_at: Instant,
}

type CacheMap<T> = Arc<RwLock<HashMap<u64, CachedEntry<T>>>>;

/// Process-wide cache shared by all request handlers.
///
/// Clones share the same underlying maps.
#[derive(Clone)]
pub struct ProfileCache {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    /// Keyed by user id.
    profiles: CacheMap<DiscordProfile>,
    /// Keyed by guild id.
    members: CacheMap<Vec<DiscordMember>>,
}

impl ProfileCache {
    pub fn new(ttl: Duration) -> Self {
        Self::with_clock(ttl, Arc::new(SystemClock))
    }

    pub fn with_clock(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            profiles: Arc::new(RwLock::new(HashMap::new())),
            members: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Gets a user's profile, fetching it from Discord when missing or expired.
    ///
    /// # Returns
    /// - `Some(DiscordProfile)` - Cached or freshly fetched profile
    /// - `None` - Discord did not return the profile
    pub async fn get_profile(
        &self,
        discord: &dyn DiscordApi,
        user_id: u64,
    ) -> Option<DiscordProfile> {
        if let Some(profile) = self.fresh(&self.profiles, user_id).await {
            return Some(profile);
        }

        match discord.get_user(user_id).await {
            Ok(profile) => {
                self.store(&self.profiles, user_id, profile.clone()).await;
                Some(profile)
            }
            Err(err) => {
                tracing::warn!("Failed to fetch Discord profile {}: {}", user_id, err);
                None
            }
        }
    }

    /// Gets up to `MEMBER_FETCH_LIMIT` members of a guild.
    ///
    /// Returns an empty list when Discord does not answer.
    pub async fn get_members(&self, discord: &dyn DiscordApi, guild_id: u64) -> Vec<DiscordMember> {
        if let Some(members) = self.fresh(&self.members, guild_id).await {
            return members;
        }

        match discord.get_members(guild_id, MEMBER_FETCH_LIMIT).await {
            Ok(members) => {
                self.store(&self.members, guild_id, members.clone()).await;
                members
            }
            Err(err) => {
                tracing::warn!("Failed to fetch members of guild {}: {}", guild_id, err);
                Vec::new()
            }
        }
    }

    async fn fresh<T: Clone>(&self, map: &CacheMap<T>, key: u64) -> Option<T> {
        let now = self.clock.now();
        let entries = map.read().await;
        let entry = entries.get(&key)?;

        (now.saturating_duration_since(entry.fetched_at) < self.ttl).then(|| entry.value.clone())
    }

    async fn store<T>(&self, map: &CacheMap<T>, key: u64, value: T) {
        let entry = CachedEntry {
            value,
            fetched_at: self.clock.now(),
        };
        map.write().await.insert(key, entry);
    }
}
