//! Domain views of the Discord REST objects the dashboard reads.
//!
//! Serenity models are converted at the API boundary so services and tests work
//! with small, plain structs.

pub mod channel;
pub mod guild;
pub mod guild_member;
pub mod role;
pub mod user;

pub use channel::{ChannelKind, DiscordChannel};
pub use guild::DiscordGuildInfo;
pub use guild_member::DiscordMember;
pub use role::DiscordRole;
pub use user::DiscordProfile;
