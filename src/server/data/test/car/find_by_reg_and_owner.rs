use super::*;

/// Tests finding an owner's car by registration.
///
/// Expected: Ok(Some(car))
#[tokio::test]
async fn finds_owners_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let created = factory::car::CarFactory::new(db, owner.owner_id)
        .reg("AB12 CDE")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let car = repo
        .find_by_reg_and_owner("AB12 CDE", owner.owner_id)
        .await?
        .unwrap();

    assert_eq!(car.id, created.car_id);

    Ok(())
}

/// Tests that another owner's car with the same registration does not match.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_owners_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_owner(db).await?;
    let other = factory::create_owner(db).await?;
    factory::car::CarFactory::new(db, other.owner_id)
        .reg("AB12 CDE")
        .build()
        .await?;

    let repo = CarRepository::new(db);
    let car = repo
        .find_by_reg_and_owner("AB12 CDE", owner.owner_id)
        .await?;

    assert!(car.is_none());

    Ok(())
}
