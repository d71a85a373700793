//! Show entry data repository.
//!
//! Provides the `CarAtShowRepository` for the `car_at_show` join table: entering cars
//! into shows, removing them, and listing the cars entered into a show.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    car::Car,
    car_at_show::{CreateCarAtShowParams, ShowCar},
};

/// Repository providing database operations for show entries.
pub struct CarAtShowRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarAtShowRepository<'a> {
    /// Creates a new CarAtShowRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `CarAtShowRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a show entry.
    ///
    /// The referenced car and show are not checked beforehand; an unknown ID fails
    /// with the database's foreign key error.
    ///
    /// # Arguments
    /// - `params` - Car and show ground IDs
    ///
    /// # Returns
    /// - `Ok(())` - Entry inserted
    /// - `Err(DbErr)` - Database error, including foreign key and primary key violations
    pub async fn create(&self, params: CreateCarAtShowParams) -> Result<(), DbErr> {
        let entry = entity::car_at_show::ActiveModel {
            car_id: ActiveValue::Set(params.car_id),
            show_ground_id: ActiveValue::Set(params.show_ground_id),
        };

        entity::prelude::CarAtShow::insert(entry)
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Checks if the car is already entered into the show.
    pub async fn exists(&self, car_id: i32, show_ground_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::CarAtShow::find()
            .filter(entity::car_at_show::Column::CarId.eq(car_id))
            .filter(entity::car_at_show::Column::ShowGroundId.eq(show_ground_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the entry of a car in a show.
    ///
    /// Only the join row is removed; the car and show rows are untouched.
    ///
    /// # Arguments
    /// - `car_id` - ID of the car
    /// - `show_ground_id` - ID of the show ground
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows removed (0 if the car was not entered)
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, car_id: i32, show_ground_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::CarAtShow::delete_many()
            .filter(entity::car_at_show::Column::CarId.eq(car_id))
            .filter(entity::car_at_show::Column::ShowGroundId.eq(show_ground_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets every car entered into a show, with the show's id and name on each row.
    ///
    /// # Arguments
    /// - `show_ground_id` - ID of the show ground
    ///
    /// # Returns
    /// - `Ok(Vec<ShowCar>)` - Entered cars ordered by car ID; empty if the show has no
    ///   entries or does not exist
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_cars_by_show(&self, show_ground_id: i32) -> Result<Vec<ShowCar>, DbErr> {
        let Some(show) = entity::prelude::ShowGround::find_by_id(show_ground_id)
            .one(self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let cars = entity::prelude::Car::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::car::Relation::CarAtShow.def(),
            )
            .filter(entity::car_at_show::Column::ShowGroundId.eq(show_ground_id))
            .order_by_asc(entity::car::Column::CarId)
            .all(self.db)
            .await?;

        Ok(cars
            .into_iter()
            .map(|car| ShowCar {
                car: Car::from_entity(car),
                show_ground_id: show.show_ground_id,
                show_name: show.show_name.clone(),
            })
            .collect())
    }
}
