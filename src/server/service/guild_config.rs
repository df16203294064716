//! Guild configuration reads and saves.
//!
//! A form save runs in this order:
//!
//! 1. Decode the form (pure; validation failures stop here).
//! 2. Begin a transaction and load the stored configuration.
//! 3. Merge the decoded document with stored keys the form did not cover, default
//!    the canonical keys and persist it, mirroring the legacy scalar columns.
//! 4. Reconcile shop roles with Discord inside the same transaction.
//! 5. Commit, then publish `config_updated`.

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use serde_json::Value;
use std::collections::HashMap;

use crate::server::{
    data::{guild_config::GuildConfigRepository, shop_role::ShopRoleRepository},
    error::AppError,
    model::{
        discord::{ChannelKind, DiscordRole},
        guild_config::{GuildConfig, GuildConfigView, UpdateGuildConfigParam},
    },
    service::{
        config::{
            defaults::{apply_defaults, merge_for_write},
            form::{decode, FormSubmission},
        },
        discord::DiscordApi,
        event::ConfigEventEmitter,
        reconcile::{log_divergence, ReconcileReport, ShopRoleReconciler},
    },
};

pub struct GuildConfigService<'a> {
    db: &'a DatabaseConnection,
    discord: &'a dyn DiscordApi,
    events: &'a ConfigEventEmitter,
}

impl<'a> GuildConfigService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        discord: &'a dyn DiscordApi,
        events: &'a ConfigEventEmitter,
    ) -> Self {
        Self {
            db,
            discord,
            events,
        }
    }

    /// Loads everything the configuration editor needs.
    ///
    /// Discord failures degrade to empty channel and role lists; the stored
    /// configuration is always returned with canonical keys defaulted.
    ///
    /// # Returns
    /// - `Ok(GuildConfigView)` - Configuration, shop roles and pickers
    /// - `Err(AppError::NotFound)` - The guild has no stored configuration
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_view(&self, guild_id: u64) -> Result<GuildConfigView, AppError> {
        let mut config = find_config(self.db, guild_id).await?;
        config.config_data = apply_defaults(config.config_data);

        let shop_roles = ShopRoleRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        let roles = self.discord.get_roles(guild_id).await.unwrap_or_else(|err| {
            tracing::warn!("Failed to fetch roles of guild {}: {}", guild_id, err);
            Vec::new()
        });
        let channels = self
            .discord
            .get_channels(guild_id)
            .await
            .unwrap_or_else(|err| {
                tracing::warn!("Failed to fetch channels of guild {}: {}", guild_id, err);
                Vec::new()
            })
            .into_iter()
            .filter(|channel| channel.kind != ChannelKind::Other)
            .collect();

        let live: HashMap<u64, &DiscordRole> = roles.iter().map(|role| (role.id, role)).collect();
        let shop_roles = shop_roles
            .into_iter()
            .map(|role| {
                let live_role = live.get(&role.role_id).map(|live| (*live).clone());
                (role, live_role)
            })
            .collect();

        Ok(GuildConfigView {
            config,
            shop_roles,
            channels,
            roles,
        })
    }

    /// Saves a submitted configuration form and reconciles shop roles.
    ///
    /// # Returns
    /// - `Ok(ReconcileReport)` - Saved; the report lists role changes and warnings
    /// - `Err(AppError::FormErr)` - The form failed to decode; nothing was written
    /// - `Err(AppError::NotFound)` - The guild has no stored configuration
    /// - `Err(AppError::DiscordErr)` - The live role list could not be fetched;
    ///   nothing was written
    /// - `Err(AppError::DbErr)` - A local write or the commit failed
    pub async fn save_form(
        &self,
        guild_id: u64,
        form: FormSubmission,
    ) -> Result<ReconcileReport, AppError> {
        let decoded = decode(&form)?;

        let txn = self.db.begin().await?;

        let stored = find_config(&txn, guild_id).await?;
        let document = merge_for_write(decoded.document, &stored.config_data);
        persist(&txn, guild_id, document).await?;

        let report = ShopRoleReconciler::new(&txn, self.discord)
            .reconcile(guild_id, decoded.shop_roles)
            .await?;

        if let Err(err) = txn.commit().await {
            log_divergence(guild_id, &report.mutations, &err);
            return Err(err.into());
        }

        tracing::info!(
            "Saved configuration of guild {} ({} warnings)",
            guild_id,
            report.warnings.len()
        );
        self.events.publish(guild_id);

        Ok(report)
    }

    /// Replaces a guild's configuration document with raw JSON.
    ///
    /// The document is stored exactly as submitted; no defaults are merged in.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - The stored configuration
    /// - `Err(AppError::JsonErr)` - The text is not valid JSON
    /// - `Err(AppError::Validation)` - The JSON is not an object
    /// - `Err(AppError::NotFound)` - The guild has no stored configuration
    pub async fn save_raw(&self, guild_id: u64, raw: &str) -> Result<GuildConfig, AppError> {
        let document: Value = serde_json::from_str(raw)?;
        if !document.is_object() {
            return Err(AppError::Validation {
                message: "Configuration data must be a JSON object".to_string(),
                field: Some("config_data".to_string()),
                submitted: Value::String(raw.to_string()),
            });
        }

        find_config(self.db, guild_id).await?;
        let config = persist(self.db, guild_id, document).await?;

        tracing::info!("Replaced raw configuration of guild {}", guild_id);
        self.events.publish(guild_id);

        Ok(config)
    }
}

async fn find_config<C: ConnectionTrait>(db: &C, guild_id: u64) -> Result<GuildConfig, AppError> {
    GuildConfigRepository::new(db)
        .find_by_guild_id(guild_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Guild {} has no configuration", guild_id)))
}

/// Writes a document and mirrors its shop channel and leaderboard thread into the
/// legacy columns.
async fn persist<C: ConnectionTrait>(
    db: &C,
    guild_id: u64,
    config_data: Value,
) -> Result<GuildConfig, AppError> {
    let identifier = |key: &str| config_data.get(key).and_then(Value::as_u64);

    let param = UpdateGuildConfigParam {
        guild_id,
        shop_channel_id: identifier("SHOP_CHANNEL_ID"),
        leaderboard_thread_id: identifier("LEADERBOARD_THREAD_ID"),
        config_data,
    };

    Ok(GuildConfigRepository::new(db).update(param).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::{
        error::form::FormError,
        model::discord::DiscordChannel,
        service::discord::fake::{FakeCall, FakeDiscordApi},
    };
    use serde_json::json;
    use test_utils::{builder::TestBuilder, context::TestContext, factory};

    const GUILD: i64 = 1;

    async fn setup(config_data: Value) -> TestContext {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::guild_config::GuildConfigFactory::new(db)
            .guild_id(GUILD)
            .config_data(config_data)
            .build()
            .await
            .unwrap();
        test
    }

    fn form(pairs: &[(&str, &str)]) -> FormSubmission {
        FormSubmission::new(
            pairs
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        )
    }

    async fn stored(db: &DatabaseConnection) -> GuildConfig {
        GuildConfigRepository::new(db)
            .find_by_guild_id(GUILD as u64)
            .await
            .unwrap()
            .unwrap()
    }

    /// Tests a full save: document, legacy columns, roles and notification.
    ///
    /// Expected: document merged and defaulted, columns mirrored, role created,
    /// one event published
    #[tokio::test]
    async fn saves_form_and_notifies() {
        let test = setup(json!({ "WIPE_SCHEDULE": { "day": 3 }, "CURRENCY_NAME": "old" })).await;
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new();
        let events = ConfigEventEmitter::new(4);
        let mut receiver = events.subscribe();

        let report = GuildConfigService::new(db, &discord, &events)
            .save_form(
                GUILD as u64,
                form(&[
                    ("SHOP_CHANNEL_ID", "10"),
                    ("LEADERBOARD_THREAD_ID", "20"),
                    ("CURRENCY_NAME", "gems"),
                    ("shop_role_name[]", "VIP"),
                    ("shop_role_price[]", "500"),
                    ("shop_role_color[]", "#ff0000"),
                ]),
            )
            .await
            .unwrap();

        assert_eq!(report.created.len(), 1);

        let config = stored(db).await;
        assert_eq!(config.shop_channel_id, Some(10));
        assert_eq!(config.leaderboard_thread_id, Some(20));
        assert_eq!(config.config_data["CURRENCY_NAME"], json!("gems"));
        assert_eq!(config.config_data["WIPE_SCHEDULE"], json!({ "day": 3 }));
        assert_eq!(config.config_data["FOOTER_MESSAGES"], json!({}));

        let event = receiver.try_recv().unwrap();
        assert_eq!(event.guild_id, "1");
    }

    /// Tests clearing channel fields by submitting them blank.
    ///
    /// Expected: document keys set to null, legacy column cleared, unsubmitted keys kept
    #[tokio::test]
    async fn blank_flat_fields_clear_stored_values() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::guild_config::GuildConfigFactory::new(db)
            .guild_id(GUILD)
            .shop_channel_id(Some(10))
            .config_data(json!({
                "SHOP_CHANNEL_ID": 10,
                "LOG_CHANNEL_ID": 30,
                "CURRENCY_NAME": "gems"
            }))
            .build()
            .await
            .unwrap();
        let discord = FakeDiscordApi::new();
        let events = ConfigEventEmitter::new(4);

        GuildConfigService::new(db, &discord, &events)
            .save_form(
                GUILD as u64,
                form(&[("SHOP_CHANNEL_ID", ""), ("LOG_CHANNEL_ID", "")]),
            )
            .await
            .unwrap();

        let config = stored(db).await;
        assert_eq!(config.shop_channel_id, None);
        assert_eq!(config.config_data["SHOP_CHANNEL_ID"], Value::Null);
        assert_eq!(config.config_data["LOG_CHANNEL_ID"], Value::Null);
        assert_eq!(config.config_data["CURRENCY_NAME"], json!("gems"));
    }

    /// Tests that a decode failure writes nothing and calls nobody.
    ///
    /// Expected: FormErr naming the field, stored document unchanged, no event
    #[tokio::test]
    async fn invalid_form_persists_nothing() {
        let test = setup(json!({ "CURRENCY_NAME": "old" })).await;
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new();
        let events = ConfigEventEmitter::new(4);
        let mut receiver = events.subscribe();

        let result = GuildConfigService::new(db, &discord, &events)
            .save_form(
                GUILD as u64,
                form(&[
                    ("CURRENCY_NAME", "new"),
                    ("CURRENCY_RATES[default][MESSAGES_PER_COIN]", "many"),
                ]),
            )
            .await;

        match result {
            Err(AppError::FormErr(FormError::InvalidInteger { field, .. })) => {
                assert_eq!(field, "CURRENCY_RATES[default][MESSAGES_PER_COIN]")
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
        assert_eq!(stored(db).await.config_data, json!({ "CURRENCY_NAME": "old" }));
        assert!(discord.calls().is_empty());
        assert!(receiver.try_recv().is_err());
    }

    /// Tests that an unreachable role list rolls back the document write.
    ///
    /// Expected: Err, stored document unchanged, no event
    #[tokio::test]
    async fn role_fetch_failure_rolls_back() {
        let test = setup(json!({ "CURRENCY_NAME": "old" })).await;
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new().failing_reads();
        let events = ConfigEventEmitter::new(4);
        let mut receiver = events.subscribe();

        let result = GuildConfigService::new(db, &discord, &events)
            .save_form(GUILD as u64, form(&[("CURRENCY_NAME", "new")]))
            .await;

        assert!(matches!(result, Err(AppError::DiscordErr(_))));
        assert_eq!(stored(db).await.config_data, json!({ "CURRENCY_NAME": "old" }));
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test]
    async fn save_requires_configuration() {
        let test = TestBuilder::new().with_economy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new();
        let events = ConfigEventEmitter::new(4);

        let result = GuildConfigService::new(db, &discord, &events)
            .save_form(9, FormSubmission::default())
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert!(discord.calls().is_empty());
    }

    /// Tests the view: defaults applied, roles joined, uninteresting channels dropped.
    #[tokio::test]
    async fn view_joins_live_roles() {
        let test = setup(json!({ "CURRENCY_NAME": "coins" })).await;
        let db = test.db.as_ref().unwrap();
        factory::shop_role::ShopRoleFactory::new(db)
            .guild_id(GUILD)
            .role_id(42)
            .build()
            .await
            .unwrap();
        factory::shop_role::ShopRoleFactory::new(db)
            .guild_id(GUILD)
            .role_id(43)
            .build()
            .await
            .unwrap();
        let discord = FakeDiscordApi::new()
            .with_role(42, "VIP", 0xFF0000)
            .with_channel(DiscordChannel {
                id: 1,
                name: "general".to_string(),
                kind: ChannelKind::Text,
                parent_id: None,
            })
            .with_channel(DiscordChannel {
                id: 2,
                name: "voice".to_string(),
                kind: ChannelKind::Other,
                parent_id: None,
            });
        let events = ConfigEventEmitter::new(4);

        let view = GuildConfigService::new(db, &discord, &events)
            .get_view(GUILD as u64)
            .await
            .unwrap();

        assert_eq!(view.config.config_data["QNA_DATA"], json!([]));
        assert_eq!(view.shop_roles.len(), 2);
        assert_eq!(
            view.shop_roles[0].1.as_ref().map(|role| role.name.as_str()),
            Some("VIP")
        );
        assert!(view.shop_roles[1].1.is_none());
        assert_eq!(view.channels.len(), 1);
        assert_eq!(
            discord.calls(),
            vec![FakeCall::GetRoles(1), FakeCall::GetChannels(1)]
        );
    }

    /// Tests that the view survives Discord being unavailable.
    #[tokio::test]
    async fn view_degrades_without_discord() {
        let test = setup(json!({})).await;
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new().failing_reads();
        let events = ConfigEventEmitter::new(4);

        let view = GuildConfigService::new(db, &discord, &events)
            .get_view(GUILD as u64)
            .await
            .unwrap();

        assert!(view.roles.is_empty());
        assert!(view.channels.is_empty());
    }

    /// Tests the raw editor: stored verbatim, columns mirrored, event published.
    #[tokio::test]
    async fn saves_raw_document_verbatim() {
        let test = setup(json!({})).await;
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new();
        let events = ConfigEventEmitter::new(4);
        let mut receiver = events.subscribe();

        let config = GuildConfigService::new(db, &discord, &events)
            .save_raw(GUILD as u64, r#"{"SHOP_CHANNEL_ID": 99, "CUSTOM": [1]}"#)
            .await
            .unwrap();

        assert_eq!(config.config_data, json!({ "SHOP_CHANNEL_ID": 99, "CUSTOM": [1] }));
        assert_eq!(config.shop_channel_id, Some(99));
        assert!(receiver.try_recv().is_ok());
    }

    #[tokio::test]
    async fn raw_document_must_be_valid_object() {
        let test = setup(json!({ "A": 1 })).await;
        let db = test.db.as_ref().unwrap();
        let discord = FakeDiscordApi::new();
        let events = ConfigEventEmitter::new(4);
        let service = GuildConfigService::new(db, &discord, &events);

        assert!(matches!(
            service.save_raw(GUILD as u64, "{ not json").await,
            Err(AppError::JsonErr(_))
        ));
        assert!(matches!(
            service.save_raw(GUILD as u64, "[1, 2]").await,
            Err(AppError::Validation { .. })
        ));
        assert_eq!(stored(db).await.config_data, json!({ "A": 1 }));
    }
}
