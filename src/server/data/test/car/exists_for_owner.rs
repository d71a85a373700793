use super::*;

/// Tests ownership check for the owning owner.
///
/// Expected: Ok(true)
#[tokio::test]
async fn returns_true_for_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, car) = factory::helpers::create_car_with_owner(db).await?;

    let repo = CarRepository::new(db);

    assert!(repo.exists_for_owner(car.car_id, owner.owner_id).await?);

    Ok(())
}

/// Tests ownership check for a different owner and for a missing car.
///
/// Expected: Ok(false) in both cases
#[tokio::test]
async fn returns_false_for_other_owner_or_missing_car() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, car) = factory::helpers::create_car_with_owner(db).await?;
    let other = factory::create_owner(db).await?;

    let repo = CarRepository::new(db);

    assert!(!repo.exists_for_owner(car.car_id, other.owner_id).await?);
    assert!(!repo.exists_for_owner(999, other.owner_id).await?);

    Ok(())
}
