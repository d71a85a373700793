use super::*;
use chrono::NaiveDate;

/// Tests finding an existing show ground.
///
/// Verifies every column is mapped onto the domain model.
///
/// Expected: Ok(Some(show))
#[tokio::test]
async fn finds_existing_show() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let date = NaiveDate::from_ymd_opt(2025, 7, 4).unwrap();
    let created = factory::show_ground::ShowGroundFactory::new(db)
        .name("Summer Classic")
        .date(date)
        .description("Pre-war cars only")
        .build()
        .await?;

    let repo = ShowGroundRepository::new(db);
    let show = repo.find_by_id(created.show_ground_id).await?.unwrap();

    assert_eq!(show.id, created.show_ground_id);
    assert_eq!(show.name, "Summer Classic");
    assert_eq!(show.date, date);
    assert_eq!(show.description.as_deref(), Some("Pre-war cars only"));
    assert!(!show.finished);

    Ok(())
}

/// Tests finding a show ground that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_car_show_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ShowGroundRepository::new(db);
    let show = repo.find_by_id(999).await?;

    assert!(show.is_none());

    Ok(())
}
