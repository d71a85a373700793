use super::*;

/// Tests finding an owner by email.
///
/// Expected: Ok(Some(owner))
#[tokio::test]
async fn finds_owner_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::owner::create_owner_with_email(db, "jane@example.com").await?;

    let repo = OwnerRepository::new(db);
    let owner = repo.find_by_email("jane@example.com").await?.unwrap();

    assert_eq!(owner.id, created.owner_id);

    Ok(())
}

/// Tests finding an email nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_owner(db).await?;

    let repo = OwnerRepository::new(db);
    let owner = repo.find_by_email("nobody@example.com").await?;

    assert!(owner.is_none());

    Ok(())
}

/// Tests that the earliest owner wins when an email is shared.
///
/// Expected: Ok(Some(first owner))
#[tokio::test]
async fn returns_first_owner_for_shared_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let first = repo.create(owner_params("shared@example.com")).await?;
    repo.create(owner_params("shared@example.com")).await?;

    let owner = repo.find_by_email("shared@example.com").await?.unwrap();

    assert_eq!(owner.id, first.id);

    Ok(())
}

/// Tests resolving an owner whose stored email has mixed case.
///
/// Rows inserted outside the API keep their original casing; the lookup lowercases
/// the stored column before comparing.
///
/// Expected: Ok(Some(owner))
#[tokio::test]
async fn matches_mixed_case_stored_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::owner::OwnerFactory::new(db)
        .email("Jane.Doe@Example.com")
        .build()
        .await?;

    let repo = OwnerRepository::new(db);
    let owner = repo.find_by_email("jane.doe@example.com").await?.unwrap();

    assert_eq!(owner.id, created.owner_id);
    assert_eq!(owner.email, "Jane.Doe@Example.com");

    Ok(())
}
