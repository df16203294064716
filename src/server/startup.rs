use sea_orm::DatabaseConnection;
use std::{sync::Arc, time::Duration};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    error::AppError,
    service::{
        cache::ProfileCache,
        custom_role::{CustomRoleDirectory, DatabaseCustomRoleDirectory, DisabledCustomRoleDirectory},
        discord::{DiscordApi, SerenityDiscordApi},
        event::ConfigEventEmitter,
    },
};

/// Connects to the economy database and brings its schema up to date.
///
/// The bot and the dashboard share this database. Migrations only create tables
/// that are missing, so running them against a database the bot already populated
/// is safe.
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Connection or migration failed
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the Discord REST client authenticated with the bot token.
///
/// Only the HTTP client is built; the dashboard never opens a gateway connection.
pub fn setup_discord_api(config: &Config) -> Arc<dyn DiscordApi> {
    Arc::new(SerenityDiscordApi::from_token(&config.discord_bot_token))
}

/// Picks the custom role directory.
///
/// Deployments without the shared custom role storage disable the feature; the
/// choice is made once here and never re-checked per request.
pub fn setup_custom_role_directory(
    config: &Config,
    db: &DatabaseConnection,
) -> Arc<dyn CustomRoleDirectory> {
    if config.custom_roles_enabled {
        Arc::new(DatabaseCustomRoleDirectory::new(db.clone()))
    } else {
        tracing::info!("Custom roles are disabled");
        Arc::new(DisabledCustomRoleDirectory)
    }
}

pub fn setup_profile_cache(config: &Config) -> ProfileCache {
    ProfileCache::new(Duration::from_secs(config.profile_cache_ttl_secs))
}

pub fn setup_event_emitter(config: &Config) -> ConfigEventEmitter {
    ConfigEventEmitter::new(config.event_channel_capacity)
}

/// Permissive CORS for the dashboard frontend, served from a separate origin.
pub fn setup_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
