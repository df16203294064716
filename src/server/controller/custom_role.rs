use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        member::{CustomRoleDto, UpdateCustomRoleDto, UpdatedCustomRoleDto},
    },
    server::{
        error::AppError,
        model::custom_role::{CustomRole, UpdateCustomRoleParam},
        service::custom_role::CustomRoleService,
        state::AppState,
    },
};

/// Tag for grouping custom role endpoints in OpenAPI documentation
pub static CUSTOM_ROLE_TAG: &str = "custom_role";

/// List a guild's custom roles.
///
/// Empty when custom roles are disabled on this dashboard.
///
/// # Arguments
/// - `state` - Application state
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - Custom roles of the guild
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/custom-roles",
    tag = CUSTOM_ROLE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Custom roles", body = Vec<CustomRoleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_custom_roles(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomRoleService::new(state.custom_roles.as_ref(), state.discord.as_ref());

    let roles: Vec<CustomRoleDto> = service
        .list(guild_id)
        .await?
        .into_iter()
        .map(CustomRole::into_dto)
        .collect();

    Ok(Json(roles))
}

/// Edit a member's custom role.
///
/// Updates the stored role and mirrors name and color to Discord. Discord
/// failures are reported as warnings.
///
/// # Arguments
/// - `state` - Application state
/// - `guild_id` - Discord guild ID
/// - `user_id` - Discord user ID owning the role
/// - `payload` - New name, color and style
///
/// # Returns
/// - `200 OK` - Updated role and warnings
/// - `400 Bad Request` - Custom roles are disabled
/// - `404 Not Found` - Member has no custom role
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/members/{user_id}/custom-role",
    tag = CUSTOM_ROLE_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID"),
        ("user_id" = u64, Path, description = "Discord user ID")
    ),
    request_body = UpdateCustomRoleDto,
    responses(
        (status = 200, description = "Custom role updated", body = UpdatedCustomRoleDto),
        (status = 400, description = "Custom roles are disabled", body = ErrorDto),
        (status = 404, description = "Member has no custom role", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_custom_role(
    State(state): State<AppState>,
    Path((guild_id, user_id)): Path<(u64, u64)>,
    Json(payload): Json<UpdateCustomRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CustomRoleService::new(state.custom_roles.as_ref(), state.discord.as_ref());

    let param = UpdateCustomRoleParam::from_dto(guild_id, user_id, payload);

    let (role, warnings) = service.update(param).await?;

    Ok(Json(UpdatedCustomRoleDto {
        custom_role: role.into_dto(),
        warnings,
    }))
}
