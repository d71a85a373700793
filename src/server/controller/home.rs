use axum::Json;

use crate::model::api::MessageDto;

/// Tag for grouping service-level endpoints in OpenAPI documentation
pub static HOME_TAG: &str = "home";

/// Returns the API welcome message.
#[utoipa::path(
    get,
    path = "/",
    tag = HOME_TAG,
    responses(
        (status = 200, description = "Welcome message", body = MessageDto)
    ),
)]
pub async fn home() -> Json<MessageDto> {
    Json(MessageDto::new("Welcome to the car_show API! /"))
}
