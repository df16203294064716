use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5001";
const DEFAULT_PROFILE_CACHE_TTL_SECS: u64 = 300;
const DEFAULT_EVENT_CHANNEL_CAPACITY: usize = 64;

pub struct Config {
    pub database_url: String,
    pub discord_bot_token: String,
    pub bind_address: String,

    /// Lifetime of cached Discord profiles and member lists.
    pub profile_cache_ttl_secs: u64,
    /// Whether custom roles are read from shared storage or disabled entirely.
    pub custom_roles_enabled: bool,
    /// Buffer size of the change notification channel.
    pub event_channel_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            discord_bot_token: required("DISCORD_BOT_TOKEN")?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            profile_cache_ttl_secs: parsed("PROFILE_CACHE_TTL_SECS", DEFAULT_PROFILE_CACHE_TTL_SECS)?,
            custom_roles_enabled: parsed("CUSTOM_ROLES_ENABLED", true)?,
            event_channel_capacity: parsed("EVENT_CHANNEL_CAPACITY", DEFAULT_EVENT_CHANNEL_CAPACITY)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.trim().parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
