use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, transaction::TransactionDto},
    server::{
        error::AppError, model::transaction::Transaction, service::transaction::TransactionService,
        state::AppState,
    },
};

/// Tag for grouping transaction endpoints in OpenAPI documentation
pub static TRANSACTION_TAG: &str = "transaction";

/// Get a guild's most recent transactions, newest first.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `guild_id` - Discord guild ID
///
/// # Returns
/// - `200 OK` - Up to 100 transactions
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/transactions",
    tag = TRANSACTION_TAG,
    params(
        ("guild_id" = u64, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "Recent transactions", body = Vec<TransactionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    let service = TransactionService::new(&state.db);

    let transactions: Vec<TransactionDto> = service
        .get_recent(guild_id)
        .await?
        .into_iter()
        .map(Transaction::into_dto)
        .collect();

    Ok(Json(transactions))
}
