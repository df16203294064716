use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Form, Json,
};
use serde_json::json;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        config::{GuildConfigDto, RawGuildConfigDto, SaveGuildConfigDto},
    },
    server::{
        error::AppError,
        service::{config::form::FormSubmission, guild_config::GuildConfigService},
        state::AppState,
    },
};

/// Tag for grouping configuration endpoints in OpenAPI documentation
pub static CONFIG_TAG: &str = "config";

/// Get a guild's configuration editor data.
///
/// Returns the stored configuration with canonical keys defaulted, tracked shop
/// roles joined with their live Discord roles, and the channel and role pickers.
///
/// # Arguments
/// - `state` - Application state containing the database connection and Discord client
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - Configuration editor data
/// - `404 Not Found` - Guild has no stored configuration
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/config",
    tag = CONFIG_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Guild configuration", body = GuildConfigDto),
        (status = 404, description = "Guild is not configured", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuildConfigService::new(&state.db, state.discord.as_ref(), &state.events);

    let view = service.get_view(guild_id).await?;

    Ok(Json(view.into_dto()))
}

/// Save the configuration form.
///
/// Decodes the URL-encoded form, persists the merged document, reconciles shop
/// roles with Discord and publishes `config_updated`. Per-row problems are returned
/// as warnings; decode failures echo the submitted fields back unmodified.
///
/// # Arguments
/// - `state` - Application state
/// - `guild_id` - Discord guild ID
/// - `fields` - Submitted form fields in order, repeated names included
///
/// # Returns
/// - `200 OK` - Save report with role changes and warnings
/// - `404 Not Found` - Guild has no stored configuration
/// - `422 Unprocessable Entity` - A field failed to decode
/// - `500 Internal Server Error` - Database or Discord error; nothing was committed
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/config",
    tag = CONFIG_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body(content_type = "application/x-www-form-urlencoded", description = "Configuration form fields"),
    responses(
        (status = 200, description = "Configuration saved", body = SaveGuildConfigDto),
        (status = 404, description = "Guild is not configured", body = ErrorDto),
        (status = 422, description = "Invalid form field", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuildConfigService::new(&state.db, state.discord.as_ref(), &state.events);

    let submitted = json!(fields);
    let report = service
        .save_form(guild_id, FormSubmission::new(fields))
        .await
        .map_err(|err| err.with_submitted(submitted))?;

    Ok(Json(report.into_dto(guild_id)))
}

/// Replace the configuration document with raw JSON.
///
/// The document is stored exactly as submitted. Invalid JSON or a non-object
/// document is rejected with the submitted text echoed back.
///
/// # Arguments
/// - `state` - Application state
/// - `guild_id` - Discord guild ID
/// - `payload` - Raw JSON text of the new document
///
/// # Returns
/// - `200 OK` - Configuration editor data after the replacement
/// - `404 Not Found` - Guild has no stored configuration
/// - `422 Unprocessable Entity` - Text is not a JSON object
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/guilds/{guild_id}/config/raw",
    tag = CONFIG_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    request_body = RawGuildConfigDto,
    responses(
        (status = 200, description = "Configuration replaced", body = GuildConfigDto),
        (status = 404, description = "Guild is not configured", body = ErrorDto),
        (status = 422, description = "Invalid JSON document", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_raw_guild_config(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
    Json(payload): Json<RawGuildConfigDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GuildConfigService::new(&state.db, state.discord.as_ref(), &state.events);

    let submitted = json!(payload.config_data);
    service
        .save_raw(guild_id, &payload.config_data)
        .await
        .map_err(|err| err.with_submitted(submitted))?;

    let view = service.get_view(guild_id).await?;

    Ok(Json(view.into_dto()))
}
