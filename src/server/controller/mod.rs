//! HTTP request handlers.
//!
//! Each handler builds the service it needs from `AppState`, converts DTOs to
//! domain parameters and maps domain results back to DTOs.

pub mod config;
pub mod custom_role;
pub mod event;
pub mod guild;
pub mod member;
pub mod transaction;
