//! Coinboard Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the dashboard.
//! This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of these components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting economy rows with sensible defaults
//! - **serenity**: Serenity API objects deserialized from Discord-shaped JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::ShopRole;
//!
//! #[tokio::test]
//! async fn test_shop_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(ShopRole)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
