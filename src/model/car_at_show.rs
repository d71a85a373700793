use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateCarAtShowDto {
    pub car_id: Option<i32>,
    pub show_ground_id: Option<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct RemoveCarFromShowDto {
    pub car_id: Option<i32>,
    pub show_ground_id: Option<i32>,
    pub owner_email: Option<String>,
}
