//! Car registration and update service.
//!
//! Cars are registered idempotently per owner and updated only by the owner who
//! registered them.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, owner::OwnerRepository},
    error::{ownership::OwnershipError, AppError},
    middleware::ownership::OwnershipGuard,
    model::car::{Car, CreateCarOutcome, CreateCarParams, UpdateCarParams},
};

pub struct CarService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a car for the owner identified by email.
    ///
    /// The owner is resolved first, then the owner's cars are searched for the same
    /// registration. A match is returned as `Existing` without inserting; otherwise a
    /// new car is inserted and returned as `Created`.
    ///
    /// # Arguments
    /// - `params` - Car fields and the owner's lowercased email
    ///
    /// # Returns
    /// - `Ok(CreateCarOutcome::Created)` - A new car was inserted
    /// - `Ok(CreateCarOutcome::Existing)` - The owner already has a car with this registration
    /// - `Err(OwnershipError::OwnerNotFound)` - No owner has this email
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateCarParams) -> Result<CreateCarOutcome, AppError> {
        let Some(owner) = OwnerRepository::new(self.db)
            .find_by_email(&params.owner_email)
            .await?
        else {
            return Err(OwnershipError::OwnerNotFound(params.owner_email).into());
        };

        let car_repo = CarRepository::new(self.db);

        if let Some(existing) = car_repo
            .find_by_reg_and_owner(&params.reg, owner.id)
            .await?
        {
            tracing::info!(
                "Owner {} already has car {} registered as {}",
                owner.id,
                existing.id,
                existing.reg
            );
            return Ok(CreateCarOutcome::Existing(existing));
        }

        let car = car_repo.create(owner.id, params).await?;

        tracing::info!("Registered car {} for owner {}", car.id, owner.id);

        Ok(CreateCarOutcome::Created(car))
    }

    /// Applies a partial update to a car after verifying ownership.
    ///
    /// # Returns
    /// - `Ok(Car)` - The updated car
    /// - `Err(OwnershipError)` - Owner unknown (404) or not the car's owner (403)
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update(&self, params: UpdateCarParams) -> Result<Car, AppError> {
        let owner = OwnershipGuard::new(self.db)
            .require(&params.owner_email, params.car_id)
            .await?;

        let car = CarRepository::new(self.db)
            .update(params.car_id, params.changes)
            .await?;

        tracing::info!("Owner {} updated car {}", owner.id, car.id);

        Ok(car)
    }
}
