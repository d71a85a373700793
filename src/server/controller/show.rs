use axum::{
    extract::{rejection::PathRejection, Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        show::{ShowCarDto, ShowGroundDetailDto, ShowGroundDto},
    },
    server::{error::AppError, service::show::ShowService, state::AppState},
};

/// Tag for grouping show endpoints in OpenAPI documentation
pub static SHOW_TAG: &str = "show";

/// List all show grounds.
///
/// Returns every show ground with all of its columns, including whether the show has
/// finished. An empty database yields an empty list.
///
/// # Returns
/// - `200 OK` - List of shows
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/shows",
    tag = SHOW_TAG,
    responses(
        (status = 200, description = "All show grounds", body = Vec<ShowGroundDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shows(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let shows = ShowService::new(&state.db).list().await?;

    Ok(Json(
        shows
            .into_iter()
            .map(|show| show.into_dto())
            .collect::<Vec<_>>(),
    ))
}

/// Get a single show ground by ID.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `show_ground_id` - ID of the show ground
///
/// # Returns
/// - `200 OK` - The show ground
/// - `400 Bad Request` - ID is not an integer
/// - `404 Not Found` - No show with this ID, body `{"message": "Show not found"}`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/show/{show_ground_id}",
    tag = SHOW_TAG,
    params(
        ("show_ground_id" = i32, Path, description = "Show ground ID")
    ),
    responses(
        (status = 200, description = "The show ground", body = ShowGroundDetailDto),
        (status = 400, description = "Invalid show ground ID", body = ErrorDto),
        (status = 404, description = "Show not found", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_show(
    State(state): State<AppState>,
    show_ground_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(show_ground_id) = show_ground_id?;

    let show = ShowService::new(&state.db).get_by_id(show_ground_id).await?;

    Ok(Json(show.into_detail_dto()))
}

/// List the cars entered into a show.
///
/// Each row carries the show's ID and name alongside the car. An unknown show or a
/// show without entries yields an empty list.
///
/// # Returns
/// - `200 OK` - Cars entered into the show
/// - `400 Bad Request` - ID is not an integer
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/cars/{show_ground_id}",
    tag = SHOW_TAG,
    params(
        ("show_ground_id" = i32, Path, description = "Show ground ID")
    ),
    responses(
        (status = 200, description = "Cars entered into the show", body = Vec<ShowCarDto>),
        (status = 400, description = "Invalid show ground ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_show_cars(
    State(state): State<AppState>,
    show_ground_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(show_ground_id) = show_ground_id?;

    let cars = ShowService::new(&state.db)
        .list_cars(show_ground_id)
        .await?;

    Ok(Json(
        cars.into_iter()
            .map(|car| car.into_dto())
            .collect::<Vec<_>>(),
    ))
}
