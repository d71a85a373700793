use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures of the email-based ownership check that guards car mutations.
#[derive(Error, Debug)]
pub enum OwnershipError {
    /// No owner is registered under the submitted email.
    ///
    /// Results in a 404 Not Found response.
    #[error("No owner registered with email '{0}'")]
    OwnerNotFound(String),

    /// The owner exists but the car does not exist or belongs to another owner.
    ///
    /// Both cases produce the same response. Results in a
    /// 403 Forbidden response.
    #[error("Owner {owner_id} attempted to modify car {car_id} which they do not own")]
    CarNotOwned {
        /// ID of the owner resolved from the submitted email
        owner_id: i32,
        /// ID of the car the request targeted
        car_id: i32,
    },
}

/// Converts ownership errors into HTTP responses.
///
/// - `OwnerNotFound` → 404 Not Found with "Owner not found"
/// - `CarNotOwned` → 403 Forbidden with "Car not found or you are not the owner"
///
/// Details (email, ids) are logged at debug level only.
impl IntoResponse for OwnershipError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::OwnerNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "Owner not found".to_string(),
                }),
            )
                .into_response(),
            Self::CarNotOwned { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Car not found or you are not the owner".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
