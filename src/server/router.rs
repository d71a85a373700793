use axum::{routing::get, Json, Router};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{car, car_at_show, home, owner, show},
    state::AppState,
};

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(title = "car_show API", description = "Car show registration backend"),
    tags(
        (name = "home", description = "Service information"),
        (name = "show", description = "Show grounds and their entered cars"),
        (name = "owner", description = "Owner registration"),
        (name = "car", description = "Car registration and updates"),
        (name = "car_at_show", description = "Entering cars into shows")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(home::home))
        .routes(routes!(show::get_shows))
        .routes(routes!(show::get_show))
        .routes(routes!(show::get_show_cars))
        .routes(routes!(owner::create_owner))
        .routes(routes!(car::create_car))
        .routes(routes!(car::update_car))
        .routes(routes!(car_at_show::add_car_to_show))
        .routes(routes!(car_at_show::remove_car_from_show))
        .split_for_parts();

    router.route(
        OPENAPI_PATH,
        get(move || {
            let api = api.clone();
            async move { Json(api) }
        }),
    )
}
