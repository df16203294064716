use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Rejected mutation with the submitted input echoed back unmodified so the
/// dashboard can re-display it.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    /// Offending field in bracket notation, when known.
    pub field: Option<String>,
    #[schema(value_type = Object)]
    pub submitted: serde_json::Value,
}
