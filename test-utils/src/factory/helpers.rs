//! Shared helper utilities for factory methods.
//!
//! Provides unique value generation and convenience methods for creating entities
//! together with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an owner and a car belonging to that owner.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((owner, car))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::owner::Model, entity::car::Model), DbErr> {
    let owner = crate::factory::owner::create_owner(db).await?;
    let car = crate::factory::car::create_car(db, owner.owner_id).await?;

    Ok((owner, car))
}

/// Creates a show, an owner, a car for that owner and enters the car into the show.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((show, owner, car))` - Tuple of the created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_car_at_show_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::show_ground::Model,
        entity::owner::Model,
        entity::car::Model,
    ),
    DbErr,
> {
    let show = crate::factory::show_ground::create_show_ground(db).await?;
    let (owner, car) = create_car_with_owner(db).await?;
    crate::factory::car_at_show::create_car_at_show(db, car.car_id, show.show_ground_id).await?;

    Ok((show, owner, car))
}
