use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Year of manufacture as sent by clients.
///
/// Accepts a bare year (`1967` or `"1967"`) or a full date (`"1967-01-01"`).
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(untagged)]
pub enum CarYearDto {
    Year(i32),
    Text(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateCarDto {
    pub car_brand: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<CarYearDto>,
    pub car_reg: Option<String>,
    pub owner_email: Option<String>,
}

/// Result of `POST /cars`.
///
/// `existing` is true when the owner already had a car with this registration and
/// no row was inserted.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CarCreatedDto {
    pub message: String,
    pub car_id: i32,
    pub existing: bool,
}

/// Partial car update payload; only the supplied car fields are written.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct UpdateCarDto {
    pub car_id: Option<i32>,
    pub owner_email: Option<String>,
    pub car_brand: Option<String>,
    pub car_model: Option<String>,
    pub car_year: Option<CarYearDto>,
    pub car_reg: Option<String>,
}
