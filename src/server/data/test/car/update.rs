use super::*;

/// Tests a partial update.
///
/// Verifies supplied columns change while the rest keep their stored values.
///
/// Expected: Ok with only brand and year changed
#[tokio::test]
async fn updates_only_supplied_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, created) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarRepository::new(db);
    let car = repo
        .update(
            created.car_id,
            CarChanges {
                brand: Some("Triumph".to_string()),
                year: Some(NaiveDate::from_ymd_opt(1969, 1, 1).unwrap()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(car.brand, "Triumph");
    assert_eq!(car.year, NaiveDate::from_ymd_opt(1969, 1, 1).unwrap());
    assert_eq!(car.model, created.car_model);
    assert_eq!(car.reg, created.car_reg);
    assert_eq!(car.owner_id, owner.owner_id);

    let stored = repo.find_by_id(created.car_id).await?.unwrap();
    assert_eq!(stored.brand, "Triumph");
    assert_eq!(stored.model, created.car_model);

    Ok(())
}

/// Tests an update with no changes.
///
/// Expected: Ok with the car unchanged
#[tokio::test]
async fn empty_changes_leave_car_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, created) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarRepository::new(db);
    let car = repo.update(created.car_id, CarChanges::default()).await?;

    assert_eq!(car.brand, created.car_brand);
    assert_eq!(car.reg, created.car_reg);

    Ok(())
}

/// Tests updating a car that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_unknown_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CarRepository::new(db);
    let result = repo
        .update(
            999,
            CarChanges {
                brand: Some("Triumph".to_string()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
