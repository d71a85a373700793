//! Owner domain model and parameters.

use crate::{model::owner::CreateOwnerDto, server::error::AppError};

/// Lowercases an email so stored and submitted addresses compare equal.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}

/// A person who registers cars, identified operationally by email.
#[derive(Debug, Clone, PartialEq)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl Owner {
    /// Converts an entity model to the owner domain model.
    pub fn from_entity(entity: entity::owner::Model) -> Self {
        Self {
            id: entity.owner_id,
            first_name: entity.owner_first_name,
            last_name: entity.owner_last_name,
            email: entity.owner_email,
            phone: entity.owner_phone,
        }
    }
}

/// Parameters for registering a new owner.
///
/// The email is normalized to lowercase on construction.
#[derive(Debug, Clone)]
pub struct CreateOwnerParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl TryFrom<CreateOwnerDto> for CreateOwnerParams {
    type Error = AppError;

    /// Fails with `BadRequest` if any of the four fields is absent.
    fn try_from(dto: CreateOwnerDto) -> Result<Self, Self::Error> {
        match (
            dto.owner_first_name,
            dto.owner_last_name,
            dto.owner_email,
            dto.owner_phone,
        ) {
            (Some(first_name), Some(last_name), Some(email), Some(phone)) => Ok(Self {
                first_name,
                last_name,
                email: normalize_email(&email),
                phone,
            }),
            _ => Err(AppError::BadRequest(
                "Missing required owner fields".to_string(),
            )),
        }
    }
}
