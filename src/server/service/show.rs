use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car_at_show::CarAtShowRepository, show_ground::ShowGroundRepository},
    error::AppError,
    model::{car_at_show::ShowCar, show_ground::ShowGround},
};

pub struct ShowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every show ground.
    pub async fn list(&self) -> Result<Vec<ShowGround>, AppError> {
        let shows = ShowGroundRepository::new(self.db).get_all().await?;

        Ok(shows)
    }

    /// Gets a single show ground, failing with `ShowNotFound` if it does not exist.
    pub async fn get_by_id(&self, id: i32) -> Result<ShowGround, AppError> {
        ShowGroundRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or(AppError::ShowNotFound(id))
    }

    /// Lists the cars entered into a show. An unknown show yields an empty list.
    pub async fn list_cars(&self, show_ground_id: i32) -> Result<Vec<ShowCar>, AppError> {
        let cars = CarAtShowRepository::new(self.db)
            .get_cars_by_show(show_ground_id)
            .await?;

        Ok(cars)
    }
}
