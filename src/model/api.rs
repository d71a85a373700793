use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every error response except the single-show lookup miss.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body carrying a human-readable status message.
///
/// Used for the welcome route, for plain mutation acknowledgements and for the
/// single-show not found response, which reports under `message` rather than `error`.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
