use super::*;
use crate::server::data::{car::CarRepository, show_ground::ShowGroundRepository};

/// Tests removing a car from a show.
///
/// Verifies only the join row is removed; the car and show remain.
///
/// Expected: Ok(1)
#[tokio::test]
async fn deletes_entry_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (show, _, car) = factory::helpers::create_car_at_show_with_dependencies(db).await?;

    let repo = CarAtShowRepository::new(db);
    let removed = repo.delete(car.car_id, show.show_ground_id).await?;

    assert_eq!(removed, 1);
    assert!(!repo.exists(car.car_id, show.show_ground_id).await?);
    assert!(CarRepository::new(db).find_by_id(car.car_id).await?.is_some());
    assert!(ShowGroundRepository::new(db)
        .find_by_id(show.show_ground_id)
        .await?
        .is_some());

    Ok(())
}

/// Tests removing a car that was never entered.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_not_entered() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let show = factory::create_show_ground(db).await?;
    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarAtShowRepository::new(db);
    let removed = repo.delete(car.car_id, show.show_ground_id).await?;

    assert_eq!(removed, 0);

    Ok(())
}
