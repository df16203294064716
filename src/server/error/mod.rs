//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod form;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::error::{config::ConfigError, form::FormError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Submitted configuration form failed to decode.
    ///
    /// Results in 422 Unprocessable Entity naming the offending field.
    #[error(transparent)]
    FormErr(#[from] FormError),

    /// Submitted raw configuration document is not valid JSON.
    ///
    /// Results in 422 Unprocessable Entity.
    #[error("Configuration data is not valid JSON: {0}")]
    JsonErr(#[from] serde_json::Error),

    /// A validation failure carrying the submitted input so the caller can
    /// re-display it unmodified.
    ///
    /// Built from `FormErr` / `JsonErr` by `AppError::with_submitted`.
    #[error("{message}")]
    Validation {
        message: String,
        field: Option<String>,
        submitted: serde_json::Value,
    },

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size. Results in 500 Internal Server Error when a
    /// Discord call a request depends on fails.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Attaches the submitted input to a validation failure.
    ///
    /// Non-validation errors are returned unchanged.
    pub fn with_submitted(self, submitted: serde_json::Value) -> Self {
        match self {
            Self::FormErr(err) => Self::Validation {
                message: err.to_string(),
                field: Some(err.field().to_string()),
                submitted,
            },
            Self::JsonErr(err) => Self::Validation {
                message: format!("Configuration data is not valid JSON: {}", err),
                field: None,
                submitted,
            },
            Self::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                submitted,
            },
            other => other,
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 422 Unprocessable Entity - For form, JSON and validation failures
/// - 500 Internal Server Error - For all other error types (DbErr, DiscordErr, etc.)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::FormErr(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorDto {
                    error: err.to_string(),
                    field: Some(err.field().to_string()),
                    submitted: serde_json::Value::Null,
                }),
            )
                .into_response(),
            Self::JsonErr(err) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorDto {
                    error: format!("Configuration data is not valid JSON: {}", err),
                    field: None,
                    submitted: serde_json::Value::Null,
                }),
            )
                .into_response(),
            Self::Validation {
                message,
                field,
                submitted,
            } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorDto {
                    error: message,
                    field,
                    submitted,
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
