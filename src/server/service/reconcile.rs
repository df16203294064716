//! Shop role reconciliation against Discord.
//!
//! Discord owns whether a role exists; the local `shop_roles` table owns its price
//! and creator. A configuration save submits the complete desired list of shop roles
//! and `ShopRoleReconciler` makes both sides match it:
//!
//! 1. Fetch the live role list once.
//! 2. Walk the submitted rows: edit tracked roles whose name or color drifted,
//!    create roles submitted without an id. Rows with no name or no positive price
//!    are ignored, and ids not tracked locally are rejected.
//! 3. Delete every tracked role that was not confirmed by step 2, in Discord first
//!    and then locally.
//! 4. Upsert the confirmed roles with their submitted prices.
//!
//! Discord calls cannot be rolled back. A failing call only affects its own row and
//! is reported as a warning; local writes go through the caller's transaction.

use sea_orm::ConnectionTrait;
use std::{
    collections::{BTreeMap, HashMap},
    fmt,
};

use crate::{
    model::config::SaveGuildConfigDto,
    server::{
        data::shop_role::ShopRoleRepository,
        error::AppError,
        model::{
            discord::DiscordRole,
            shop_role::{ShopRole, ShopRoleRow, UpsertShopRoleParam},
        },
        service::discord::DiscordApi,
        util::color::{parse_hex_color, DEFAULT_ROLE_COLOR},
    },
};

/// Audit log reason attached to role deletions.
const DELETE_REASON: &str = "Removed from the shop via the dashboard";

/// A Discord change applied during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExternalMutation {
    Created { role_id: u64, name: String },
    Edited { role_id: u64 },
    Deleted { role_id: u64 },
}

impl fmt::Display for ExternalMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created { role_id, name } => write!(f, "created role {} ({})", role_id, name),
            Self::Edited { role_id } => write!(f, "edited role {}", role_id),
            Self::Deleted { role_id } => write!(f, "deleted role {}", role_id),
        }
    }
}

/// Outcome of one reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Roles inserted locally (newly created in Discord).
    pub created: Vec<u64>,
    /// Tracked roles whose row was confirmed and re-priced.
    pub updated: Vec<u64>,
    /// Tracked roles removed locally.
    pub deleted: Vec<u64>,
    /// Per-row problems that were skipped.
    pub warnings: Vec<String>,
    /// Discord changes applied, in order.
    pub mutations: Vec<ExternalMutation>,
}

impl ReconcileReport {
    fn warn(&mut self, guild_id: u64, message: String) {
        tracing::warn!("Shop role reconciliation for guild {}: {}", guild_id, message);
        self.warnings.push(message);
    }

    pub fn into_dto(self, guild_id: u64) -> SaveGuildConfigDto {
        SaveGuildConfigDto {
            guild_id,
            created_roles: self.created,
            updated_roles: self.updated,
            deleted_roles: self.deleted,
            warnings: self.warnings,
        }
    }
}

/// Logs Discord changes that local storage failed to record.
///
/// Discord and the database stay out of sync until the next save; the entry is
/// written under its own target so it can be alerted on separately.
pub fn log_divergence(guild_id: u64, mutations: &[ExternalMutation], error: &dyn fmt::Display) {
    if mutations.is_empty() {
        return;
    }

    let applied: Vec<String> = mutations.iter().map(ToString::to_string).collect();
    tracing::error!(
        target: "coinboard::divergence",
        guild_id,
        "Discord was changed but the local write failed ({}); applied: {}",
        error,
        applied.join(", ")
    );
}

/// Live Discord roles indexed for lookup.
struct RoleSnapshot {
    by_id: HashMap<u64, DiscordRole>,
    by_name: HashMap<String, u64>,
}

impl RoleSnapshot {
    fn new(roles: Vec<DiscordRole>) -> Self {
        let by_name = roles.iter().map(|role| (role.name.clone(), role.id)).collect();
        let by_id = roles.into_iter().map(|role| (role.id, role)).collect();
        Self { by_id, by_name }
    }
}

/// A role confirmed present in Discord, waiting to be upserted.
struct ConfirmedRole {
    price: i64,
    is_new: bool,
}

pub struct ShopRoleReconciler<'a, C: ConnectionTrait> {
    db: &'a C,
    discord: &'a dyn DiscordApi,
}

impl<'a, C: ConnectionTrait> ShopRoleReconciler<'a, C> {
    pub fn new(db: &'a C, discord: &'a dyn DiscordApi) -> Self {
        Self { db, discord }
    }

    /// Reconciles a guild's shop roles with the submitted rows.
    ///
    /// # Arguments
    /// - `guild_id` - Guild being saved
    /// - `rows` - Complete desired shop role list, in submission order
    ///
    /// # Returns
    /// - `Ok(ReconcileReport)` - Changes applied and per-row warnings
    /// - `Err(AppError::DiscordErr)` - The live role list could not be fetched; nothing
    ///   was changed
    /// - `Err(AppError::DbErr)` - A local write failed; Discord changes made before the
    ///   failure are logged as a divergence
    pub async fn reconcile(
        &self,
        guild_id: u64,
        rows: Vec<ShopRoleRow>,
    ) -> Result<ReconcileReport, AppError> {
        let repo = ShopRoleRepository::new(self.db);

        let local: HashMap<u64, ShopRole> = repo
            .get_by_guild_id(guild_id)
            .await?
            .into_iter()
            .map(|role| (role.role_id, role))
            .collect();
        let snapshot = RoleSnapshot::new(self.discord.get_roles(guild_id).await?);

        let mut report = ReconcileReport::default();
        let result = self
            .apply(guild_id, rows, &local, &snapshot, &mut report)
            .await;

        if let Err(err) = &result {
            log_divergence(guild_id, &report.mutations, err);
        }
        result.map(|()| report)
    }

    async fn apply(
        &self,
        guild_id: u64,
        rows: Vec<ShopRoleRow>,
        local: &HashMap<u64, ShopRole>,
        snapshot: &RoleSnapshot,
        report: &mut ReconcileReport,
    ) -> Result<(), AppError> {
        let repo = ShopRoleRepository::new(self.db);
        let mut confirmed: BTreeMap<u64, ConfirmedRole> = BTreeMap::new();

        for (index, row) in rows.into_iter().enumerate() {
            let name = row.name.trim();
            if name.is_empty() {
                continue;
            }
            let price = match row.price {
                Some(price) if price > 0 => price,
                _ => {
                    tracing::debug!(
                        "Skipping shop role row {} ({}) without a positive price",
                        index,
                        name
                    );
                    continue;
                }
            };
            let color = self.resolve_color(guild_id, name, &row.color, report);

            match row.role_id {
                Some(role_id) => {
                    if self
                        .edit_tracked(guild_id, role_id, name, color, local, snapshot, report)
                        .await
                    {
                        confirmed.insert(
                            role_id,
                            ConfirmedRole {
                                price,
                                is_new: false,
                            },
                        );
                    }
                }
                None => {
                    if let Some(role_id) = self.create(guild_id, name, color, snapshot, report).await
                    {
                        confirmed.insert(
                            role_id,
                            ConfirmedRole {
                                price,
                                is_new: true,
                            },
                        );
                    }
                }
            }
        }

        let mut stale: Vec<u64> = local
            .keys()
            .filter(|role_id| !confirmed.contains_key(role_id))
            .copied()
            .collect();
        stale.sort_unstable();

        for role_id in stale {
            if snapshot.by_id.contains_key(&role_id) {
                match self
                    .discord
                    .delete_role(guild_id, role_id, Some(DELETE_REASON))
                    .await
                {
                    Ok(()) => report.mutations.push(ExternalMutation::Deleted { role_id }),
                    Err(err) => report.warn(
                        guild_id,
                        format!("Failed to delete role {} from Discord: {}", role_id, err),
                    ),
                }
            }

            repo.delete(guild_id, role_id).await?;
            report.deleted.push(role_id);
        }

        for (role_id, role) in confirmed {
            repo.upsert(UpsertShopRoleParam {
                role_id,
                guild_id,
                price: role.price,
                creator_id: None,
            })
            .await?;

            if role.is_new {
                report.created.push(role_id);
            } else {
                report.updated.push(role_id);
            }
        }

        tracing::info!(
            "Reconciled shop roles for guild {}: {} created, {} updated, {} deleted",
            guild_id,
            report.created.len(),
            report.updated.len(),
            report.deleted.len()
        );

        Ok(())
    }

    /// Falls back to the neutral default when the color is blank or not `#RRGGBB`.
    fn resolve_color(
        &self,
        guild_id: u64,
        name: &str,
        raw: &str,
        report: &mut ReconcileReport,
    ) -> u32 {
        if raw.trim().is_empty() {
            return DEFAULT_ROLE_COLOR;
        }

        parse_hex_color(raw).unwrap_or_else(|| {
            report.warn(
                guild_id,
                format!(
                    "Invalid color '{}' for role {}; using the default color",
                    raw, name
                ),
            );
            DEFAULT_ROLE_COLOR
        })
    }

    /// Applies an edit row to a tracked role. Returns whether the role is confirmed.
    #[allow(clippy::too_many_arguments)]
    async fn edit_tracked(
        &self,
        guild_id: u64,
        role_id: u64,
        name: &str,
        color: u32,
        local: &HashMap<u64, ShopRole>,
        snapshot: &RoleSnapshot,
        report: &mut ReconcileReport,
    ) -> bool {
        if !local.contains_key(&role_id) {
            report.warn(
                guild_id,
                format!("Role {} is not a shop role of this server and was ignored", role_id),
            );
            return false;
        }

        let Some(live) = snapshot.by_id.get(&role_id) else {
            report.warn(
                guild_id,
                format!(
                    "Role {} ({}) no longer exists in Discord and was removed from the shop",
                    role_id, name
                ),
            );
            return false;
        };

        let new_name = (live.name != name).then_some(name);
        let new_color = (live.color != color).then_some(color);
        if new_name.is_none() && new_color.is_none() {
            return true;
        }

        match self
            .discord
            .edit_role(guild_id, role_id, new_name, new_color)
            .await
        {
            Ok(()) => report.mutations.push(ExternalMutation::Edited { role_id }),
            Err(err) => report.warn(
                guild_id,
                format!("Failed to update role {} in Discord: {}", name, err),
            ),
        }

        true
    }

    /// Creates a role in Discord. Returns the new id on success.
    async fn create(
        &self,
        guild_id: u64,
        name: &str,
        color: u32,
        snapshot: &RoleSnapshot,
        report: &mut ReconcileReport,
    ) -> Option<u64> {
        if let Some(existing) = snapshot.by_name.get(name) {
            report.warn(
                guild_id,
                format!(
                    "A role named {} already exists ({}); another one was created",
                    name, existing
                ),
            );
        }

        match self.discord.create_role(guild_id, name, color).await {
            Ok(role) => {
                report.mutations.push(ExternalMutation::Created {
                    role_id: role.id,
                    name: name.to_string(),
                });
                Some(role.id)
            }
            Err(err) => {
                report.warn(
                    guild_id,
                    format!("Failed to create role {} in Discord: {}", name, err),
                );
                None
            }
        }
    }
}
