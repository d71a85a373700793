use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        car::{CarCreatedDto, CreateCarDto, UpdateCarDto},
    },
    server::{
        error::AppError,
        model::car::{CreateCarOutcome, CreateCarParams, UpdateCarParams},
        service::car::CarService,
        state::AppState,
    },
};

/// Tag for grouping car endpoints in OpenAPI documentation
pub static CAR_TAG: &str = "car";

/// Register a car for an owner.
///
/// The owner is identified by `owner_email`. If that owner already has a car with
/// the same registration, the existing car is returned and nothing is inserted.
///
/// # Returns
/// - `201 Created` - New car registered, `existing: false`
/// - `200 OK` - Owner already has this registration, `existing: true`
/// - `400 Bad Request` - A required field is missing, the year is invalid or the body is malformed
/// - `404 Not Found` - No owner has this email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/cars",
    tag = CAR_TAG,
    request_body = CreateCarDto,
    responses(
        (status = 201, description = "Car registered", body = CarCreatedDto),
        (status = 200, description = "Car already registered for this owner", body = CarCreatedDto),
        (status = 400, description = "Missing required car fields", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_car(
    State(state): State<AppState>,
    payload: Result<Json<CreateCarDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = CreateCarParams::try_from(payload)?;

    let outcome = CarService::new(&state.db).create(params).await?;

    let (status, message) = match &outcome {
        CreateCarOutcome::Created(_) => (StatusCode::CREATED, "Car added successfully"),
        CreateCarOutcome::Existing(_) => (StatusCode::OK, "Car already exists"),
    };

    Ok((
        status,
        Json(CarCreatedDto {
            message: message.to_string(),
            car_id: outcome.car().id,
            existing: outcome.is_existing(),
        }),
    ))
}

/// Update some fields of a car.
///
/// Only the owner of the car, identified by `owner_email`, may update it. Fields left
/// out of the body keep their stored values.
///
/// # Returns
/// - `200 OK` - Car updated
/// - `400 Bad Request` - `car_id`/`owner_email` missing, no field to update, or invalid year
/// - `403 Forbidden` - Car does not exist or belongs to another owner
/// - `404 Not Found` - No owner has this email
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/update_car",
    tag = CAR_TAG,
    request_body = UpdateCarDto,
    responses(
        (status = 200, description = "Car updated", body = MessageDto),
        (status = 400, description = "Invalid update request", body = ErrorDto),
        (status = 403, description = "Car not found or not owned by this owner", body = ErrorDto),
        (status = 404, description = "Owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_car(
    State(state): State<AppState>,
    payload: Result<Json<UpdateCarDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let params = UpdateCarParams::try_from(payload)?;

    CarService::new(&state.db).update(params).await?;

    Ok(Json(MessageDto::new("Car updated successfully")))
}
