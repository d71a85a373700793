//! Show entry domain models and parameters.
//!
//! A show entry is a row of `car_at_show`, recording that a car is registered at a
//! show ground.

use crate::{
    model::{
        car_at_show::{CreateCarAtShowDto, RemoveCarFromShowDto},
        show::ShowCarDto,
    },
    server::{
        error::AppError, model::car::Car, model::owner::normalize_email,
        util::parse::format_date,
    },
};

/// A car entered into a show, carrying the show's id and name alongside the car.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowCar {
    pub car: Car,
    pub show_ground_id: i32,
    pub show_name: String,
}

impl ShowCar {
    pub fn into_dto(self) -> ShowCarDto {
        ShowCarDto {
            car_id: self.car.id,
            car_brand: self.car.brand,
            car_model: self.car.model,
            car_year: format_date(self.car.year),
            car_reg: self.car.reg,
            show_ground_id: self.show_ground_id,
            show_name: self.show_name,
        }
    }
}

/// Parameters for entering a car into a show.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CreateCarAtShowParams {
    pub car_id: i32,
    pub show_ground_id: i32,
}

impl TryFrom<CreateCarAtShowDto> for CreateCarAtShowParams {
    type Error = AppError;

    fn try_from(dto: CreateCarAtShowDto) -> Result<Self, Self::Error> {
        match (dto.car_id, dto.show_ground_id) {
            (Some(car_id), Some(show_ground_id)) => Ok(Self {
                car_id,
                show_ground_id,
            }),
            _ => Err(AppError::BadRequest("Missing required fields".to_string())),
        }
    }
}

/// Parameters for the ownership-guarded removal of a car from a show.
#[derive(Debug, Clone)]
pub struct RemoveCarFromShowParams {
    pub car_id: i32,
    pub show_ground_id: i32,
    /// Lowercased owner email.
    pub owner_email: String,
}

impl TryFrom<RemoveCarFromShowDto> for RemoveCarFromShowParams {
    type Error = AppError;

    fn try_from(dto: RemoveCarFromShowDto) -> Result<Self, Self::Error> {
        match (dto.car_id, dto.show_ground_id, dto.owner_email) {
            (Some(car_id), Some(show_ground_id), Some(owner_email)) => Ok(Self {
                car_id,
                show_ground_id,
                owner_email: normalize_email(&owner_email),
            }),
            _ => Err(AppError::BadRequest("Missing required fields".to_string())),
        }
    }
}
