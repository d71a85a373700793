use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        car_at_show::{CreateCarAtShowDto, RemoveCarFromShowDto},
    },
    server::{
        error::AppError,
        model::car_at_show::{CreateCarAtShowParams, RemoveCarFromShowParams},
        service::car_at_show::CarAtShowService,
        state::AppState,
    },
};

/// Tag for grouping show entry endpoints in OpenAPI documentation
pub static CAR_AT_SHOW_TAG: &str = "car_at_show";

/// Enter a car into a show.
///
/// Neither ID is validated beforehand; an unknown car or show is reported by the
/// database as a 500.
///
/// # Returns
/// - `201 Created` - Car entered into the show
/// - `200 OK` - Car was already entered into the show
/// - `400 Bad Request` - `car_id` or `show_ground_id` missing, or the body is malformed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/car_at_show",
    tag = CAR_AT_SHOW_TAG,
    request_body = CreateCarAtShowDto,
    responses(
        (status = 201, description = "Car entered into the show", body = MessageDto),
        (status = 200, description = "Car already entered into the show", body = MessageDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_car_to_show(
    State(state): State<AppState>,
    payload: Result<Json<CreateCarAtShowDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateCarAtShowParams::try_from(payload)?;

    let created = CarAtShowService::new(&state.db).add(params).await?;

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((
        status,
        Json(MessageDto::new("Car associated with show successfully")),
    ))
}

/// Remove a car from a show.
///
/// Only the owner of the car, identified by `owner_email`, may remove it. The car and
/// the show themselves are kept.
///
/// # Returns
/// - `200 OK` - Car removed from the show
/// - `400 Bad Request` - A required field is missing or the body is malformed
/// - `403 Forbidden` - Car does not exist or belongs to another owner
/// - `404 Not Found` - No owner has this email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/remove_car_from_show",
    tag = CAR_AT_SHOW_TAG,
    request_body = RemoveCarFromShowDto,
    responses(
        (status = 200, description = "Car removed from the show", body = MessageDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 403, description = "Car not found or not owned by this owner", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_car_from_show(
    State(state): State<AppState>,
    payload: Result<Json<RemoveCarFromShowDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = RemoveCarFromShowParams::try_from(payload)?;

    CarAtShowService::new(&state.db).remove(params).await?;

    Ok(Json(MessageDto::new("Car removed from this show")))
}
