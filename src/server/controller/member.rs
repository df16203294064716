use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{
            BalanceChangeDto, MemberDetailDto, MemberPageDto, MemberQueryDto, UpdateBalanceDto,
        },
    },
    server::{
        error::AppError,
        model::user::SetBalanceParam,
        service::{ledger::BalanceLedger, member::MemberService},
        state::AppState,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Get a page of guild members with their balances.
///
/// Members come from Discord's member listing (cached, first 1000 members) and
/// are matched against `search` on username or display name.
///
/// # Arguments
/// - `state` - Application state
/// - `guild_id` - Discord guild ID
/// - `query` - Search text and pagination
///
/// # Returns
/// - `200 OK` - Page of members; empty when Discord did not answer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/members",
    tag = MEMBER_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        MemberQueryDto
    ),
    responses(
        (status = 200, description = "Page of members", body = MemberPageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Query(query): Query<MemberQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(
        &state.db,
        state.discord.as_ref(),
        &state.profile_cache,
        state.custom_roles.as_ref(),
    );

    let page = service
        .list(guild_id, query.search.as_deref(), query.page, query.per_page)
        .await?;

    Ok(Json(page.into_dto()))
}

/// Get one member's economy record.
///
/// Creates a zero-balance account the first time a member is viewed.
///
/// # Arguments
/// - `state` - Application state
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID
///
/// # Returns
/// - `200 OK` - Member balance, profile and custom role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/members/{user_id}",
    tag = MEMBER_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Member detail", body = MemberDetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member(
    State(state): State<AppState>,
    Path((guild_id, user_id)): Path<(u64, u64)>,
) -> Result<impl IntoResponse, AppError> {
    let service = MemberService::new(
        &state.db,
        state.discord.as_ref(),
        &state.profile_cache,
        state.custom_roles.as_ref(),
    );

    let detail = service.detail(guild_id, user_id).await?;

    Ok(Json(detail.into_dto()))
}

/// Set a member's balance.
///
/// Writes the new balance and, when it differs from the old one, an
/// `admin_set_balance` transaction in a single database transaction.
///
/// # Arguments
/// - `state` - Application state
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID
/// - `payload` - New absolute balance
///
/// # Returns
/// - `200 OK` - Previous and new balance with the audit row id
/// - `400 Bad Request` - Change is out of range
/// - `500 Internal Server Error` - Database error; nothing was written
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/members/{user_id}/balance",
    tag = MEMBER_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    request_body = UpdateBalanceDto,
    responses(
        (status = 200, description = "Balance updated", body = BalanceChangeDto),
        (status = 400, description = "Change is out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_member_balance(
    State(state): State<AppState>,
    Path((guild_id, user_id)): Path<(u64, u64)>,
    Json(payload): Json<UpdateBalanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let ledger = BalanceLedger::new(&state.db);

    let param = SetBalanceParam::from_dto(guild_id, user_id, payload);

    let change = ledger.set_balance(param).await?;

    Ok(Json(change.into_dto()))
}
