//! Test factories for creating Serenity API objects.
//!
//! Serenity models are built by deserializing the JSON Discord would return, so
//! conversions from Serenity types can be tested without a live bot token.
//!
//! ```rust,ignore
//! use test_utils::serenity::role::create_test_role;
//!
//! let role = create_test_role(42, "VIP", 0xFF0000);
//! let converted = DiscordRole::from(&role);
//! ```

pub mod role;
