use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Name of the event published after a configuration save commits.
pub const CONFIG_UPDATED_EVENT: &str = "config_updated";

/// Change notification consumed by the bot process.
///
/// Only `guild_id` is meaningful; subscribers re-read the configuration from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ConfigEventDto {
    pub event: String,
    pub guild_id: String,
}

impl ConfigEventDto {
    pub fn config_updated(guild_id: u64) -> Self {
        Self {
            event: CONFIG_UPDATED_EVENT.to_string(),
            guild_id: guild_id.to_string(),
        }
    }
}
