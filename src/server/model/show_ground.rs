//! Show ground domain model.

use chrono::NaiveDate;

use crate::{
    model::show::{ShowGroundDetailDto, ShowGroundDto},
    server::util::parse::format_date,
};

/// A car show event and the ground it is held on.
#[derive(Debug, Clone, PartialEq)]
pub struct ShowGround {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub county: String,
    pub postcode: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub finished: bool,
}

impl ShowGround {
    /// Converts an entity model to the show ground domain model.
    pub fn from_entity(entity: entity::show_ground::Model) -> Self {
        Self {
            id: entity.show_ground_id,
            name: entity.show_name,
            country: entity.show_country,
            county: entity.show_county,
            postcode: entity.show_postcode,
            date: entity.show_date,
            description: entity.show_description,
            finished: entity.finished,
        }
    }

    /// Converts to the listing DTO, which carries every stored column.
    pub fn into_dto(self) -> ShowGroundDto {
        ShowGroundDto {
            show_ground_id: self.id,
            show_name: self.name,
            show_country: self.country,
            show_county: self.county,
            show_postcode: self.postcode,
            show_date: format_date(self.date),
            show_description: self.description,
            finished: self.finished,
        }
    }

    /// Converts to the single-show DTO, a fixed projection without `finished`.
    pub fn into_detail_dto(self) -> ShowGroundDetailDto {
        ShowGroundDetailDto {
            show_ground_id: self.id,
            show_name: self.name,
            show_country: self.country,
            show_county: self.county,
            show_postcode: self.postcode,
            show_date: format_date(self.date),
            show_description: self.description,
        }
    }
}
