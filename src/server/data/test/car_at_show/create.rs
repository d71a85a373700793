use super::*;

/// Tests entering a car into a show.
///
/// Expected: Ok with the entry present afterwards
#[tokio::test]
async fn creates_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let show = factory::create_show_ground(db).await?;
    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarAtShowRepository::new(db);
    assert!(!repo.exists(car.car_id, show.show_ground_id).await?);

    repo.create(CreateCarAtShowParams {
        car_id: car.car_id,
        show_ground_id: show.show_ground_id,
    })
    .await?;

    assert!(repo.exists(car.car_id, show.show_ground_id).await?);

    Ok(())
}

/// Tests inserting the same entry twice.
///
/// Expected: Err from the composite primary key
#[tokio::test]
async fn rejects_duplicate_entry() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (show, _, car) = factory::helpers::create_car_at_show_with_dependencies(db).await?;

    let repo = CarAtShowRepository::new(db);
    let result = repo
        .create(CreateCarAtShowParams {
            car_id: car.car_id,
            show_ground_id: show.show_ground_id,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

/// Tests entering a car into a show that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_show() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarAtShowRepository::new(db);
    let result = repo
        .create(CreateCarAtShowParams {
            car_id: car.car_id,
            show_ground_id: 999,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
