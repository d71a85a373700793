//! Car factory for creating test car entities.

use crate::factory::helpers::next_id;
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cars bound to an existing owner.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::car::CarFactory;
///
/// let car = CarFactory::new(&db, owner.owner_id)
///     .brand("Jaguar")
///     .model("E-Type")
///     .year(1961)
///     .build()
///     .await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    brand: String,
    model: String,
    year: NaiveDate,
    reg: String,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values.
    ///
    /// Defaults:
    /// - brand: `"Ford"`, model: `"Capri"`
    /// - year: 1978-01-01
    /// - reg: `"REG{id}"`
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            brand: "Ford".to_string(),
            model: "Capri".to_string(),
            year: NaiveDate::from_ymd_opt(1978, 1, 1).unwrap_or_default(),
            reg: format!("REG{}", id),
        }
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the year of manufacture, stored as January 1st of that year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or_default();
        self
    }

    pub fn reg(mut self, reg: impl Into<String>) -> Self {
        self.reg = reg.into();
        self
    }

    /// Builds and inserts the car entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::car::Model)` - Created car entity
    /// - `Err(DbErr)` - Database error during insert (e.g. unknown owner id)
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            car_brand: ActiveValue::Set(self.brand),
            car_model: ActiveValue::Set(self.model),
            car_year: ActiveValue::Set(self.year),
            car_reg: ActiveValue::Set(self.reg),
            owner_id: ActiveValue::Set(self.owner_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a car with default values for the given owner.
pub async fn create_car(db: &DatabaseConnection, owner_id: i32) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db, owner_id).build().await
}
