//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod ownership;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, MessageDto},
    server::error::{config::ConfigError, ownership::OwnershipError},
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `OwnershipError`
/// handle their own response mapping, while generic variants provide standard HTTP
/// status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Owner lookup or car ownership verification failed.
    ///
    /// Delegates to `OwnershipError::into_response()` for 404/403 mapping.
    #[error(transparent)]
    OwnershipErr(#[from] OwnershipError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error. The driver message is returned to the
    /// caller as well as logged.
    #[error("Database error: {0}")]
    DbErr(#[from] sea_orm::DbErr),

    /// I/O error while binding or serving the listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested show ground does not exist.
    ///
    /// Results in 404 Not Found with a `{"message": "Show not found"}` body. The
    /// `message` key differs from every other error response; existing clients
    /// depend on it.
    #[error("Show {0} not found")]
    ShowNotFound(i32),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message. Raised before any
    /// database access.
    #[error("{0}")]
    BadRequest(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For the `ShowNotFound` variant
/// - Variable - For `OwnershipErr`, delegated to `OwnershipError::into_response()`
/// - 500 Internal Server Error - For all other error types (DbErr, IoErr, ...)
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::OwnershipErr(err) => err.into_response(),
            Self::ShowNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(MessageDto::new("Show not found")),
            )
                .into_response(),
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns its message to the caller in an `ErrorDto`.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        tracing::error!("{}", message);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto { error: message }),
        )
            .into_response()
    }
}
