//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let config = factory::create_guild_config(&db).await?;
//!     let role = factory::shop_role::ShopRoleFactory::new(&db)
//!         .guild_id(config.guild_id)
//!         .price(250)
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `guild_config` - Create guild configuration rows
//! - `shop_role` - Create shop role rows
//! - `user` - Create economy user rows
//! - `transaction` - Create transaction log rows
//! - `custom_role` - Create custom role rows
//! - `helpers` - Unique id generation shared by all factories

pub mod custom_role;
pub mod guild_config;
pub mod helpers;
pub mod shop_role;
pub mod transaction;
pub mod user;

pub use custom_role::create_custom_role;
pub use guild_config::create_guild_config;
pub use shop_role::create_shop_role;
pub use transaction::create_transaction;
pub use user::create_user;
