use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        guild::{GuildListDto, GuildOverviewDto},
    },
    server::{error::AppError, service::guild::GuildService, state::AppState},
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// List configured guilds.
///
/// Returns every guild with a stored configuration. A database failure yields an
/// empty list with a warning rather than an error so the index page still renders.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - Configured guilds, possibly with a warning
#[utoipa::path(
    get,
    path = "/api/guilds",
    tag = GUILD_TAG,
    responses(
        (status = 200, description = "Configured guilds", body = GuildListDto)
    ),
)]
pub async fn get_guilds(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = GuildService::new(&state.db, state.discord.as_ref());

    let guilds = service.list_guilds().await;

    Ok(Json(guilds.into_dto()))
}

/// Get a guild's live Discord metadata.
///
/// # Arguments
/// - `state` - Application state containing the database connection and Discord client
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - Guild name and icon; both `null` when Discord did not answer
/// - `404 Not Found` - Guild has no stored configuration
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild overview", body = GuildOverviewDto),
        (status = 404, description = "Guild is not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuildService::new(&state.db, state.discord.as_ref());

    let overview = match service.overview(guild_id).await? {
        Some(info) => info.into_dto(),
        None => GuildOverviewDto {
            guild_id,
            name: None,
            icon_url: None,
        },
    };

    Ok(Json(overview))
}
