//! Change notifications for configuration saves.
//!
//! Subscribers (the bot process) receive `config_updated` with the guild id and
//! re-read the configuration from storage. Delivery is at most once: events sent
//! while nobody listens are dropped and lagging subscribers skip ahead.

use tokio::sync::broadcast;

use crate::model::event::ConfigEventDto;

#[derive(Clone)]
pub struct ConfigEventEmitter {
    sender: broadcast::Sender<ConfigEventDto>,
}

impl ConfigEventEmitter {
    /// Creates an emitter buffering up to `capacity` undelivered events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publishes `config_updated` for a guild.
    ///
    /// # Returns
    /// - `usize` - Number of subscribers the event was queued for
    pub fn publish(&self, guild_id: u64) -> usize {
        match self.sender.send(ConfigEventDto::config_updated(guild_id)) {
            Ok(receivers) => {
                tracing::debug!(
                    "Published config_updated for guild {} to {} subscribers",
                    guild_id,
                    receivers
                );
                receivers
            }
            Err(_) => {
                tracing::debug!("No subscribers for config_updated of guild {}", guild_id);
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ConfigEventDto> {
        self.sender.subscribe()
    }
}
