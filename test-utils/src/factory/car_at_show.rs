//! Factory for entering cars into shows.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a `car_at_show` row for the given pair.
///
/// # Arguments
/// - `db` - Database connection
/// - `car_id` - ID of an existing car
/// - `show_ground_id` - ID of an existing show ground
///
/// # Returns
/// - `Ok(entity::car_at_show::Model)` - Created association
/// - `Err(DbErr)` - Database error during insert
pub async fn create_car_at_show(
    db: &DatabaseConnection,
    car_id: i32,
    show_ground_id: i32,
) -> Result<entity::car_at_show::Model, DbErr> {
    entity::car_at_show::ActiveModel {
        car_id: ActiveValue::Set(car_id),
        show_ground_id: ActiveValue::Set(show_ground_id),
    }
    .insert(db)
    .await
}
