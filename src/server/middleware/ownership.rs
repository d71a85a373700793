use sea_orm::DatabaseConnection;

use crate::server::{
    data::{car::CarRepository, owner::OwnerRepository},
    error::{ownership::OwnershipError, AppError},
    model::owner::Owner,
};

/// Verifies that the owner identified by an email owns a car.
///
/// The email acts as the caller's credential: whoever submits it is treated as that
/// owner.
pub struct OwnershipGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OwnershipGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the owner by email, then checks the car belongs to them.
    ///
    /// # Arguments
    /// - `owner_email` - Lowercased email submitted with the request
    /// - `car_id` - ID of the car the request targets
    ///
    /// # Returns
    /// - `Ok(Owner)` - The verified owner
    /// - `Err(OwnershipError::OwnerNotFound)` - No owner has this email
    /// - `Err(OwnershipError::CarNotOwned)` - Car missing or owned by someone else
    /// - `Err(AppError::DbErr)` - Database error during lookup
    pub async fn require(&self, owner_email: &str, car_id: i32) -> Result<Owner, AppError> {
        let Some(owner) = OwnerRepository::new(self.db)
            .find_by_email(owner_email)
            .await?
        else {
            return Err(OwnershipError::OwnerNotFound(owner_email.to_string()).into());
        };

        if !CarRepository::new(self.db)
            .exists_for_owner(car_id, owner.id)
            .await?
        {
            tracing::warn!(
                "Owner {} was refused access to car {}",
                owner.id,
                car_id
            );
            return Err(OwnershipError::CarNotOwned {
                owner_id: owner.id,
                car_id,
            }
            .into());
        }

        Ok(owner)
    }
}
