use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        owner::{CreateOwnerDto, OwnerCreatedDto},
    },
    server::{
        error::AppError, model::owner::CreateOwnerParams, service::owner::OwnerService,
        state::AppState,
    },
};

/// Tag for grouping owner endpoints in OpenAPI documentation
pub static OWNER_TAG: &str = "owner";

/// Register a new owner.
///
/// All four owner fields are required. The email is stored lowercased and is not
/// checked for uniqueness.
///
/// # Returns
/// - `201 Created` - Owner registered, body carries the new `owner_id`
/// - `400 Bad Request` - A required field is missing or the body is malformed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/owners",
    tag = OWNER_TAG,
    request_body = CreateOwnerDto,
    responses(
        (status = 201, description = "Owner registered", body = OwnerCreatedDto),
        (status = 400, description = "Missing required owner fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_owner(
    State(state): State<AppState>,
    payload: Result<Json<CreateOwnerDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateOwnerParams::try_from(payload)?;

    let owner = OwnerService::new(&state.db).create(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(OwnerCreatedDto {
            message: "Owner added successfully".to_string(),
            owner_id: owner.id,
        }),
    ))
}
