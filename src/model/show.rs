use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A show ground as returned by the show listing, every stored column included.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShowGroundDto {
    pub show_ground_id: i32,
    pub show_name: String,
    pub show_country: String,
    pub show_county: String,
    pub show_postcode: String,
    /// Format: "YYYY-MM-DD"
    pub show_date: String,
    pub show_description: Option<String>,
    pub finished: bool,
}

/// A single show ground as returned by `GET /show/{id}`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShowGroundDetailDto {
    pub show_ground_id: i32,
    pub show_name: String,
    pub show_country: String,
    pub show_county: String,
    pub show_postcode: String,
    /// Format: "YYYY-MM-DD"
    pub show_date: String,
    pub show_description: Option<String>,
}

/// A car entered into a show, with the show's id and name repeated on every row.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ShowCarDto {
    pub car_id: i32,
    pub car_brand: String,
    pub car_model: String,
    /// Format: "YYYY-MM-DD"
    pub car_year: String,
    pub car_reg: String,
    pub show_ground_id: i32,
    pub show_name: String,
}
