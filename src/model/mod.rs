//! Serializable API data transfer objects shared by the HTTP layer.

pub mod api;
pub mod config;
pub mod event;
pub mod guild;
pub mod member;
pub mod transaction;
