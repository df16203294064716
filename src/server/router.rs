use axum::{
    routing::{get, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        config::{GuildConfigDto, RawGuildConfigDto, SaveGuildConfigDto, ShopRoleDto},
        event::ConfigEventDto,
        guild::{
            DiscordChannelDto, DiscordRoleDto, GuildListDto, GuildOverviewDto, GuildSummaryDto,
        },
        member::{
            BalanceChangeDto, CustomRoleDto, MemberDetailDto, MemberDto, MemberPageDto,
            UpdateBalanceDto, UpdateCustomRoleDto, UpdatedCustomRoleDto,
        },
        transaction::TransactionDto,
    },
    server::{
        controller::{
            config::{get_guild_config, save_guild_config, save_raw_guild_config},
            custom_role::{get_custom_roles, update_custom_role},
            event::get_events,
            guild::{get_guild, get_guilds},
            member::{get_member, get_members, set_member_balance},
            transaction::get_transactions,
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::server::controller::guild::get_guilds,
        crate::server::controller::guild::get_guild,
        crate::server::controller::config::get_guild_config,
        crate::server::controller::config::save_guild_config,
        crate::server::controller::config::save_raw_guild_config,
        crate::server::controller::member::get_members,
        crate::server::controller::member::get_member,
        crate::server::controller::member::set_member_balance,
        crate::server::controller::custom_role::get_custom_roles,
        crate::server::controller::custom_role::update_custom_role,
        crate::server::controller::transaction::get_transactions,
        crate::server::controller::event::get_events,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        GuildListDto,
        GuildSummaryDto,
        GuildOverviewDto,
        DiscordChannelDto,
        DiscordRoleDto,
        GuildConfigDto,
        ShopRoleDto,
        SaveGuildConfigDto,
        RawGuildConfigDto,
        MemberDto,
        MemberPageDto,
        MemberDetailDto,
        CustomRoleDto,
        UpdateBalanceDto,
        BalanceChangeDto,
        UpdateCustomRoleDto,
        UpdatedCustomRoleDto,
        TransactionDto,
        ConfigEventDto,
    ))
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/guilds", get(get_guilds))
        .route("/api/guilds/{guild_id}", get(get_guild))
        .route(
            "/api/guilds/{guild_id}/config",
            get(get_guild_config).post(save_guild_config),
        )
        .route("/api/guilds/{guild_id}/config/raw", put(save_raw_guild_config))
        .route("/api/guilds/{guild_id}/members", get(get_members))
        .route("/api/guilds/{guild_id}/members/{user_id}", get(get_member))
        .route(
            "/api/guilds/{guild_id}/members/{user_id}/balance",
            put(set_member_balance),
        )
        .route(
            "/api/guilds/{guild_id}/members/{user_id}/custom-role",
            put(update_custom_role),
        )
        .route("/api/guilds/{guild_id}/custom-roles", get(get_custom_roles))
        .route("/api/guilds/{guild_id}/transactions", get(get_transactions))
        .route("/api/events", get(get_events))
        .route("/api/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
}
