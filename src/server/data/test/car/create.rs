use super::*;

/// Tests creating a car for an existing owner.
///
/// Expected: Ok with car bound to the owner
#[tokio::test]
async fn creates_car_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;

    let repo = CarRepository::new(db);
    let car = repo.create(owner.owner_id, car_params("AB12 CDE")).await?;

    assert!(car.id > 0);
    assert_eq!(car.owner_id, owner.owner_id);
    assert_eq!(car.brand, "Ford");
    assert_eq!(car.year, NaiveDate::from_ymd_opt(1978, 1, 1).unwrap());

    let stored = repo.find_by_id(car.id).await?.unwrap();
    assert_eq!(stored.reg, "AB12 CDE");

    Ok(())
}

/// Tests creating a car for an owner that does not exist.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn fails_for_unknown_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo.create(999, car_params("AB12 CDE")).await;

    assert!(result.is_err());

    Ok(())
}
