//! Custom role access.
//!
//! Custom roles live in storage shared with the bot. Deployments without that
//! storage run with the feature disabled; the choice is made once at startup by
//! picking a `CustomRoleDirectory` implementation.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::custom_role::CustomRoleRepository,
    error::AppError,
    model::custom_role::{CustomRole, UpdateCustomRoleParam},
    service::discord::DiscordApi,
    util::color::parse_hex_color,
};

/// Read and edit access to members' custom roles.
#[async_trait]
pub trait CustomRoleDirectory: Send + Sync {
    async fn list_all(&self, guild_id: u64) -> Result<Vec<CustomRole>, AppError>;

    async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<CustomRole>, AppError>;

    /// Edits an existing custom role. `Ok(None)` when the member has none.
    async fn update(&self, param: UpdateCustomRoleParam) -> Result<Option<CustomRole>, AppError>;
}

/// Directory backed by the shared `custom_roles` table.
pub struct DatabaseCustomRoleDirectory {
    db: DatabaseConnection,
}

impl DatabaseCustomRoleDirectory {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CustomRoleDirectory for DatabaseCustomRoleDirectory {
    async fn list_all(&self, guild_id: u64) -> Result<Vec<CustomRole>, AppError> {
        Ok(CustomRoleRepository::new(&self.db)
            .get_by_guild_id(guild_id)
            .await?)
    }

    async fn find(&self, guild_id: u64, user_id: u64) -> Result<Option<CustomRole>, AppError> {
        Ok(CustomRoleRepository::new(&self.db)
            .find(guild_id, user_id)
            .await?)
    }

    async fn update(&self, param: UpdateCustomRoleParam) -> Result<Option<CustomRole>, AppError> {
        Ok(CustomRoleRepository::new(&self.db).update(param).await?)
    }
}

/// Directory used when custom roles are turned off: nothing is listed and edits are
/// rejected.
pub struct DisabledCustomRoleDirectory;

#[async_trait]
impl CustomRoleDirectory for DisabledCustomRoleDirectory {
    async fn list_all(&self, _guild_id: u64) -> Result<Vec<CustomRole>, AppError> {
        Ok(Vec::new())
    }

    async fn find(&self, _guild_id: u64, _user_id: u64) -> Result<Option<CustomRole>, AppError> {
        Ok(None)
    }

    async fn update(&self, _param: UpdateCustomRoleParam) -> Result<Option<CustomRole>, AppError> {
        Err(AppError::BadRequest(
            "Custom roles are disabled on this dashboard".to_string(),
        ))
    }
}

pub struct CustomRoleService<'a> {
    directory: &'a dyn CustomRoleDirectory,
    discord: &'a dyn DiscordApi,
}

impl<'a> CustomRoleService<'a> {
    pub fn new(directory: &'a dyn CustomRoleDirectory, discord: &'a dyn DiscordApi) -> Self {
        Self { directory, discord }
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<CustomRole>, AppError> {
        self.directory.list_all(guild_id).await
    }

    /// Edits a member's custom role and mirrors its name and color to Discord.
    ///
    /// The stored row is the record of truth; Discord failures and unparseable colors
    /// only produce warnings.
    ///
    /// # Returns
    /// - `Ok((CustomRole, warnings))` - Updated role and any Discord problems
    /// - `Err(AppError::NotFound)` - The member has no custom role
    /// - `Err(AppError::BadRequest)` - Custom roles are disabled
    pub async fn update(
        &self,
        param: UpdateCustomRoleParam,
    ) -> Result<(CustomRole, Vec<String>), AppError> {
        let (guild_id, user_id) = (param.guild_id, param.user_id);
        let role = self.directory.update(param).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "User {} has no custom role in guild {}",
                user_id, guild_id
            ))
        })?;

        let mut warnings = Vec::new();
        let color = parse_hex_color(&role.role_color);
        if color.is_none() {
            warnings.push(format!(
                "Color '{}' is not a hex color; the Discord role color was left unchanged",
                role.role_color
            ));
        }

        if let Err(err) = self
            .discord
            .edit_role(guild_id, role.role_id, Some(&role.role_name), color)
            .await
        {
            tracing::warn!(
                "Failed to update custom role {} in guild {}: {}",
                role.role_id,
                guild_id,
                err
            );
            warnings.push(format!("Failed to update the role in Discord: {}", err));
        }

        tracing::info!(
            "Updated custom role of user {} in guild {}",
            user_id,
            guild_id
        );

        Ok((role, warnings))
    }
}
