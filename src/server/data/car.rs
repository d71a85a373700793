//! Car data repository.
//!
//! Provides the `CarRepository` for inserting, looking up and partially updating cars.
//! Ownership rules are enforced above this layer; the repository only offers the
//! queries those rules are built from.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::car::{Car, CarChanges, CreateCarParams};

/// Repository providing database operations for cars.
pub struct CarRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarRepository<'a> {
    /// Creates a new CarRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CarRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new car bound to the given owner.
    ///
    /// Performs no duplicate check; callers wanting idempotent creation must call
    /// `find_by_reg_and_owner` first.
    ///
    /// # Arguments
    /// - `owner_id` - ID of the resolved owner
    /// - `params` - Car fields
    ///
    /// # Returns
    /// - `Ok(Car)` - The created car with its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, owner_id: i32, params: CreateCarParams) -> Result<Car, DbErr> {
        let entity = entity::car::ActiveModel {
            car_brand: ActiveValue::Set(params.brand),
            car_model: ActiveValue::Set(params.model),
            car_year: ActiveValue::Set(params.year),
            car_reg: ActiveValue::Set(params.reg),
            owner_id: ActiveValue::Set(owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Car::from_entity(entity))
    }

    /// Finds a car by ID.
    #[cfg(test)]
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Finds the car an owner has registered under the given registration.
    ///
    /// The lookup is scoped to the owner: the same registration under another owner
    /// does not match.
    ///
    /// # Arguments
    /// - `reg` - Registration as submitted
    /// - `owner_id` - ID of the owner
    ///
    /// # Returns
    /// - `Ok(Some(Car))` - The owner's car with this registration
    /// - `Ok(None)` - The owner has no car with this registration
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_reg_and_owner(
        &self,
        reg: &str,
        owner_id: i32,
    ) -> Result<Option<Car>, DbErr> {
        let entity = entity::prelude::Car::find()
            .filter(entity::car::Column::CarReg.eq(reg))
            .filter(entity::car::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::car::Column::CarId)
            .one(self.db)
            .await?;

        Ok(entity.map(Car::from_entity))
    }

    /// Checks if a car exists and belongs to the specified owner.
    ///
    /// # Arguments
    /// - `id` - ID of the car to check
    /// - `owner_id` - ID of the owner
    ///
    /// # Returns
    /// - `Ok(true)` - Car exists and belongs to the owner
    /// - `Ok(false)` - Car doesn't exist or belongs to a different owner
    /// - `Err(DbErr)` - Database error during query
    pub async fn exists_for_owner(&self, id: i32, owner_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Car::find()
            .filter(entity::car::Column::CarId.eq(id))
            .filter(entity::car::Column::OwnerId.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Writes the supplied columns of a car in a single UPDATE statement.
    ///
    /// Columns whose change is `None` are left out of the statement. An empty change
    /// set returns the car unchanged without touching the database row.
    ///
    /// # Arguments
    /// - `id` - ID of the car to update
    /// - `changes` - Columns to overwrite
    ///
    /// # Returns
    /// - `Ok(Car)` - The car after the update
    /// - `Err(DbErr::RecordNotFound)` - No car exists with the specified ID
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, id: i32, changes: CarChanges) -> Result<Car, DbErr> {
        let car = entity::prelude::Car::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Car with id {} not found", id)))?;

        if changes.is_empty() {
            return Ok(Car::from_entity(car));
        }

        let mut active_model: entity::car::ActiveModel = car.into();
        if let Some(brand) = changes.brand {
            active_model.car_brand = ActiveValue::Set(brand);
        }
        if let Some(model) = changes.model {
            active_model.car_model = ActiveValue::Set(model);
        }
        if let Some(year) = changes.year {
            active_model.car_year = ActiveValue::Set(year);
        }
        if let Some(reg) = changes.reg {
            active_model.car_reg = ActiveValue::Set(reg);
        }

        let entity = active_model.update(self.db).await?;

        Ok(Car::from_entity(entity))
    }
}
