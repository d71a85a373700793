//! Car domain model and parameters.
//!
//! Provides the car domain model, the parameters for idempotent creation and for
//! ownership-guarded partial updates, and the outcome type distinguishing a fresh
//! insert from a registration the owner already had.

use chrono::NaiveDate;

use crate::{
    model::car::{CreateCarDto, UpdateCarDto},
    server::{error::AppError, model::owner::normalize_email, util::parse::parse_car_year},
};

/// A vehicle record belonging to exactly one owner.
#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub model: String,
    /// Year of manufacture, stored as January 1st unless a full date was supplied.
    pub year: NaiveDate,
    pub reg: String,
    pub owner_id: i32,
}

impl Car {
    /// Converts an entity model to the car domain model.
    pub fn from_entity(entity: entity::car::Model) -> Self {
        Self {
            id: entity.car_id,
            brand: entity.car_brand,
            model: entity.car_model,
            year: entity.car_year,
            reg: entity.car_reg,
            owner_id: entity.owner_id,
        }
    }
}

/// Outcome of an idempotent car creation.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateCarOutcome {
    /// A new row was inserted.
    Created(Car),
    /// The owner already had a car with this registration; nothing was inserted.
    Existing(Car),
}

impl CreateCarOutcome {
    pub fn car(&self) -> &Car {
        match self {
            Self::Created(car) | Self::Existing(car) => car,
        }
    }

    pub fn is_existing(&self) -> bool {
        matches!(self, Self::Existing(_))
    }
}

/// Parameters for registering a car under the owner identified by `owner_email`.
#[derive(Debug, Clone)]
pub struct CreateCarParams {
    pub brand: String,
    pub model: String,
    pub year: NaiveDate,
    pub reg: String,
    /// Lowercased owner email.
    pub owner_email: String,
}

impl TryFrom<CreateCarDto> for CreateCarParams {
    type Error = AppError;

    /// Fails with `BadRequest` if any field is absent or the year is unparseable.
    fn try_from(dto: CreateCarDto) -> Result<Self, Self::Error> {
        let (Some(brand), Some(model), Some(year), Some(reg), Some(owner_email)) = (
            dto.car_brand,
            dto.car_model,
            dto.car_year,
            dto.car_reg,
            dto.owner_email,
        ) else {
            return Err(AppError::BadRequest(
                "Missing required car fields".to_string(),
            ));
        };

        Ok(Self {
            brand,
            model,
            year: parse_car_year(year)?,
            reg,
            owner_email: normalize_email(&owner_email),
        })
    }
}

/// The subset of car columns a partial update writes. `None` leaves a column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarChanges {
    pub brand: Option<String>,
    pub model: Option<String>,
    pub year: Option<NaiveDate>,
    pub reg: Option<String>,
}

impl CarChanges {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.model.is_none() && self.year.is_none() && self.reg.is_none()
    }
}

/// Parameters for an ownership-guarded partial car update.
#[derive(Debug, Clone)]
pub struct UpdateCarParams {
    pub car_id: i32,
    /// Lowercased owner email.
    pub owner_email: String,
    pub changes: CarChanges,
}

impl TryFrom<UpdateCarDto> for UpdateCarParams {
    type Error = AppError;

    /// Fails with `BadRequest` if `car_id`/`owner_email` are absent, if no car field is
    /// supplied, or if the supplied year is unparseable.
    fn try_from(dto: UpdateCarDto) -> Result<Self, Self::Error> {
        let (Some(car_id), Some(owner_email)) = (dto.car_id, dto.owner_email) else {
            return Err(AppError::BadRequest(
                "Missing required fields (car_id and owner_email)".to_string(),
            ));
        };

        if dto.car_brand.is_none()
            && dto.car_model.is_none()
            && dto.car_year.is_none()
            && dto.car_reg.is_none()
        {
            return Err(AppError::BadRequest(
                "No fields provided to update".to_string(),
            ));
        }

        let changes = CarChanges {
            brand: dto.car_brand,
            model: dto.car_model,
            year: dto.car_year.map(parse_car_year).transpose()?,
            reg: dto.car_reg,
        };

        Ok(Self {
            car_id,
            owner_email: normalize_email(&owner_email),
            changes,
        })
    }
}
