//! In-process `DiscordApi` used by service tests.
//!
//! Holds a mutable role list, records every call in order and fails selected calls
//! on request.

use async_trait::async_trait;
use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use crate::server::{
    error::AppError,
    model::discord::{DiscordChannel, DiscordGuildInfo, DiscordMember, DiscordProfile, DiscordRole},
    service::discord::DiscordApi,
};

/// A recorded Discord call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeCall {
    GetGuild(u64),
    GetChannels(u64),
    GetRoles(u64),
    CreateRole { name: String, color: u32 },
    EditRole {
        role_id: u64,
        name: Option<String>,
        color: Option<u32>,
    },
    DeleteRole(u64),
    GetMembers { guild_id: u64, limit: u64 },
    GetUser(u64),
}

#[derive(Default)]
struct FakeState {
    roles: Vec<DiscordRole>,
    channels: Vec<DiscordChannel>,
    members: Vec<DiscordMember>,
    profiles: HashMap<u64, DiscordProfile>,
    next_role_id: u64,
    calls: Vec<FakeCall>,
    fail_reads: bool,
    fail_create: HashSet<String>,
    fail_edit: HashSet<u64>,
    fail_delete: HashSet<u64>,
}

pub struct FakeDiscordApi {
    state: Mutex<FakeState>,
}

fn injected_failure() -> AppError {
    AppError::DiscordErr(Box::new(serenity::Error::Other("injected failure")))
}

impl FakeDiscordApi {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeState {
                next_role_id: 9_000,
                ..Default::default()
            }),
        }
    }

    pub fn with_role(self, id: u64, name: &str, color: u32) -> Self {
        self.state.lock().unwrap().roles.push(DiscordRole {
            id,
            name: name.to_string(),
            color,
        });
        self
    }

    pub fn with_channel(self, channel: DiscordChannel) -> Self {
        self.state.lock().unwrap().channels.push(channel);
        self
    }

    pub fn with_member(self, user_id: u64, name: &str) -> Self {
        self.state.lock().unwrap().members.push(DiscordMember {
            user_id,
            username: name.to_lowercase(),
            display_name: name.to_string(),
            avatar_url: None,
        });
        self
    }

    pub fn with_profile(self, user_id: u64, display_name: &str) -> Self {
        self.state.lock().unwrap().profiles.insert(
            user_id,
            DiscordProfile {
                user_id,
                display_name: display_name.to_string(),
                avatar_url: None,
            },
        );
        self
    }

    /// Makes every read (guild, channels, roles, members, users) fail.
    pub fn failing_reads(self) -> Self {
        self.state.lock().unwrap().fail_reads = true;
        self
    }

    pub fn failing_create(self, name: &str) -> Self {
        self.state.lock().unwrap().fail_create.insert(name.to_string());
        self
    }

    pub fn failing_edit(self, role_id: u64) -> Self {
        self.state.lock().unwrap().fail_edit.insert(role_id);
        self
    }

    pub fn failing_delete(self, role_id: u64) -> Self {
        self.state.lock().unwrap().fail_delete.insert(role_id);
        self
    }

    pub fn calls(&self) -> Vec<FakeCall> {
        self.state.lock().unwrap().calls.clone()
    }

    /// Calls that change Discord state.
    pub fn mutations(&self) -> Vec<FakeCall> {
        self.calls()
            .into_iter()
            .filter(|call| {
                matches!(
                    call,
                    FakeCall::CreateRole { .. } | FakeCall::EditRole { .. } | FakeCall::DeleteRole(_)
                )
            })
            .collect()
    }

    pub fn roles(&self) -> Vec<DiscordRole> {
        self.state.lock().unwrap().roles.clone()
    }

    fn record(&self, call: FakeCall) -> std::sync::MutexGuard<'_, FakeState> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        state
    }
}

#[async_trait]
impl DiscordApi for FakeDiscordApi {
    async fn get_guild(&self, guild_id: u64) -> Result<DiscordGuildInfo, AppError> {
        let state = self.record(FakeCall::GetGuild(guild_id));
        if state.fail_reads {
            return Err(injected_failure());
        }
        Ok(DiscordGuildInfo {
            guild_id,
            name: format!("Guild {}", guild_id),
            icon_url: None,
        })
    }

    async fn get_channels(&self, guild_id: u64) -> Result<Vec<DiscordChannel>, AppError> {
        let state = self.record(FakeCall::GetChannels(guild_id));
        if state.fail_reads {
            return Err(injected_failure());
        }
        Ok(state.channels.clone())
    }

    async fn get_roles(&self, guild_id: u64) -> Result<Vec<DiscordRole>, AppError> {
        let state = self.record(FakeCall::GetRoles(guild_id));
        if state.fail_reads {
            return Err(injected_failure());
        }
        Ok(state.roles.clone())
    }

    async fn create_role(
        &self,
        _guild_id: u64,
        name: &str,
        color: u32,
    ) -> Result<DiscordRole, AppError> {
        let mut state = self.record(FakeCall::CreateRole {
            name: name.to_string(),
            color,
        });
        if state.fail_create.contains(name) {
            return Err(injected_failure());
        }

        state.next_role_id += 1;
        let role = DiscordRole {
            id: state.next_role_id,
            name: name.to_string(),
            color,
        };
        state.roles.push(role.clone());
        Ok(role)
    }

    async fn edit_role(
        &self,
        _guild_id: u64,
        role_id: u64,
        name: Option<&str>,
        color: Option<u32>,
    ) -> Result<(), AppError> {
        let mut state = self.record(FakeCall::EditRole {
            role_id,
            name: name.map(str::to_string),
            color,
        });
        if state.fail_edit.contains(&role_id) {
            return Err(injected_failure());
        }

        if let Some(role) = state.roles.iter_mut().find(|role| role.id == role_id) {
            if let Some(name) = name {
                role.name = name.to_string();
            }
            if let Some(color) = color {
                role.color = color;
            }
        }
        Ok(())
    }

    async fn delete_role(
        &self,
        _guild_id: u64,
        role_id: u64,
        _reason: Option<&str>,
    ) -> Result<(), AppError> {
        let mut state = self.record(FakeCall::DeleteRole(role_id));
        if state.fail_delete.contains(&role_id) {
            return Err(injected_failure());
        }

        state.roles.retain(|role| role.id != role_id);
        Ok(())
    }

    async fn get_members(
        &self,
        guild_id: u64,
        limit: u64,
    ) -> Result<Vec<DiscordMember>, AppError> {
        let state = self.record(FakeCall::GetMembers { guild_id, limit });
        if state.fail_reads {
            return Err(injected_failure());
        }
        Ok(state.members.iter().take(limit as usize).cloned().collect())
    }

    async fn get_user(&self, user_id: u64) -> Result<DiscordProfile, AppError> {
        let state = self.record(FakeCall::GetUser(user_id));
        if state.fail_reads {
            return Err(injected_failure());
        }
        state
            .profiles
            .get(&user_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Unknown user {}", user_id)))
    }
}
