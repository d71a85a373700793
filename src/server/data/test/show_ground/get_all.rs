use super::*;

/// Tests listing show grounds on an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_when_no_shows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShowGroundRepository::new(db);
    let shows = repo.get_all().await?;

    assert!(shows.is_empty());

    Ok(())
}

/// Tests that every show ground is returned in ID order.
///
/// Finished shows are included alongside upcoming ones.
///
/// Expected: Ok with all shows ordered by ID
#[tokio::test]
async fn returns_all_shows_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_show_ground(db).await?;
    let second = factory::show_ground::ShowGroundFactory::new(db)
        .finished(true)
        .build()
        .await?;

    let repo = ShowGroundRepository::new(db);
    let shows = repo.get_all().await?;

    assert_eq!(shows.len(), 2);
    assert_eq!(shows[0].id, first.show_ground_id);
    assert_eq!(shows[1].id, second.show_ground_id);
    assert!(shows[1].finished);

    Ok(())
}
