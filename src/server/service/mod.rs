//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Decoding configuration forms, defaulting documents and
//!   reconciling shop roles against Discord
//! - **Orchestration**: Coordinating repository calls with Discord REST calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Configuration saves and balance writes run in a
//!   single database transaction

pub mod cache;
pub mod config;
pub mod custom_role;
pub mod discord;
pub mod event;
pub mod guild;
pub mod guild_config;
pub mod ledger;
pub mod member;
pub mod reconcile;
pub mod transaction;
