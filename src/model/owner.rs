use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Owner registration payload.
///
/// Every field is optional on the wire so that a missing field is reported as a 400
/// with a domain message instead of a deserialization rejection.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
pub struct CreateOwnerDto {
    pub owner_first_name: Option<String>,
    pub owner_last_name: Option<String>,
    pub owner_email: Option<String>,
    pub owner_phone: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OwnerCreatedDto {
    pub message: String,
    pub owner_id: i32,
}
