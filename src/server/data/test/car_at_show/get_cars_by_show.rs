use super::*;

/// Tests listing the cars entered into a show.
///
/// Verifies cars entered into other shows are excluded and each row carries the
/// show's id and name.
///
/// Expected: Ok with the show's cars ordered by car ID
#[tokio::test]
async fn returns_cars_entered_into_show() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let show = factory::show_ground::ShowGroundFactory::new(db)
        .name("Summer Classic")
        .build()
        .await?;
    let other_show = factory::create_show_ground(db).await?;
    let owner = factory::create_owner(db).await?;
    let first = factory::create_car(db, owner.owner_id).await?;
    let second = factory::create_car(db, owner.owner_id).await?;
    let elsewhere = factory::create_car(db, owner.owner_id).await?;

    factory::create_car_at_show(db, second.car_id, show.show_ground_id).await?;
    factory::create_car_at_show(db, first.car_id, show.show_ground_id).await?;
    factory::create_car_at_show(db, elsewhere.car_id, other_show.show_ground_id).await?;

    let repo = CarAtShowRepository::new(db);
    let cars = repo.get_cars_by_show(show.show_ground_id).await?;

    assert_eq!(cars.len(), 2);
    assert_eq!(cars[0].car.id, first.car_id);
    assert_eq!(cars[1].car.id, second.car_id);
    assert!(cars
        .iter()
        .all(|c| c.show_ground_id == show.show_ground_id && c.show_name == "Summer Classic"));

    Ok(())
}

/// Tests listing cars for a show with no entries.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_show_without_entries() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let show = factory::create_show_ground(db).await?;

    let repo = CarAtShowRepository::new(db);
    let cars = repo.get_cars_by_show(show.show_ground_id).await?;

    assert!(cars.is_empty());

    Ok(())
}

/// Tests listing cars for a show that does not exist.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_show() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarAtShowRepository::new(db);
    let cars = repo.get_cars_by_show(999).await?;

    assert!(cars.is_empty());

    Ok(())
}
