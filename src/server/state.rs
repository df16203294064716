//! Application state shared across all request handlers.
//!
//! Initialized once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database handle is a pool,
//! and the Discord client, caches and emitter share their state behind `Arc`s.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{
    cache::ProfileCache, custom_role::CustomRoleDirectory, discord::DiscordApi,
    event::ConfigEventEmitter,
};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the shared economy database.
    pub db: DatabaseConnection,

    /// Discord REST client used for roles, channels, members and profiles.
    pub discord: Arc<dyn DiscordApi>,

    /// Process-wide cache of Discord profiles and member listings.
    pub profile_cache: ProfileCache,

    /// Publishes `config_updated` after each committed save.
    pub events: ConfigEventEmitter,

    /// Custom role storage, or the disabled directory when the feature is off.
    pub custom_roles: Arc<dyn CustomRoleDirectory>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `discord` - Discord REST client
    /// - `profile_cache` - Shared profile and member cache
    /// - `events` - Change notification emitter
    /// - `custom_roles` - Custom role directory chosen at startup
    pub fn new(
        db: DatabaseConnection,
        discord: Arc<dyn DiscordApi>,
        profile_cache: ProfileCache,
        events: ConfigEventEmitter,
        custom_roles: Arc<dyn CustomRoleDirectory>,
    ) -> Self {
        Self {
            db,
            discord,
            profile_cache,
            events,
            custom_roles,
        }
    }
}
