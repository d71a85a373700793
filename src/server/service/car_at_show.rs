use sea_orm::DatabaseConnection;

use crate::server::{
    data::car_at_show::CarAtShowRepository,
    error::AppError,
    middleware::ownership::OwnershipGuard,
    model::car_at_show::{CreateCarAtShowParams, RemoveCarFromShowParams},
};

pub struct CarAtShowService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarAtShowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Enters a car into a show.
    ///
    /// Neither ID is checked beforehand; an unknown car or show fails with a
    /// database error.
    ///
    /// # Returns
    /// - `Ok(true)` - The entry was created
    /// - `Ok(false)` - The car was already entered into this show
    /// - `Err(AppError::DbErr)` - Database error, including foreign key violations
    pub async fn add(&self, params: CreateCarAtShowParams) -> Result<bool, AppError> {
        let repo = CarAtShowRepository::new(self.db);

        if repo.exists(params.car_id, params.show_ground_id).await? {
            return Ok(false);
        }

        repo.create(params).await?;

        tracing::info!(
            "Car {} entered into show {}",
            params.car_id,
            params.show_ground_id
        );

        Ok(true)
    }

    /// Removes a car from a show after verifying the caller owns the car.
    ///
    /// Succeeds even if the car was not entered into the show.
    pub async fn remove(&self, params: RemoveCarFromShowParams) -> Result<(), AppError> {
        let owner = OwnershipGuard::new(self.db)
            .require(&params.owner_email, params.car_id)
            .await?;

        let removed = CarAtShowRepository::new(self.db)
            .delete(params.car_id, params.show_ground_id)
            .await?;

        tracing::info!(
            "Owner {} removed car {} from show {} ({} row(s))",
            owner.id,
            params.car_id,
            params.show_ground_id,
            removed
        );

        Ok(())
    }
}
