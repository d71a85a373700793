use super::*;

/// Tests creating an owner.
///
/// Verifies the row is persisted with a generated ID and can be read back.
///
/// Expected: Ok with owner created
#[tokio::test]
async fn creates_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let owner = repo.create(owner_params("jane@example.com")).await?;

    assert!(owner.id > 0);
    assert_eq!(owner.first_name, "Jane");
    assert_eq!(owner.email, "jane@example.com");

    let stored = repo.find_by_id(owner.id).await?.unwrap();
    assert_eq!(stored.phone, "07000000000");

    Ok(())
}

/// Tests creating two owners with the same email.
///
/// Email is not unique; both rows are stored.
///
/// Expected: Ok with two distinct owner IDs
#[tokio::test]
async fn allows_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OwnerRepository::new(db);
    let first = repo.create(owner_params("same@example.com")).await?;
    let second = repo.create(owner_params("same@example.com")).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
