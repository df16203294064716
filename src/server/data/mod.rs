//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Every repository is generic over `ConnectionTrait` so the same code runs against the
//! pooled `DatabaseConnection` or inside a `DatabaseTransaction`.

pub mod custom_role;
pub mod guild_config;
pub mod shop_role;
pub mod transaction;
pub mod user;

#[cfg(test)]
mod test;
