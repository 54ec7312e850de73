use super::*;

/// Tests listing all courts ordered by name.
///
/// Verifies that every court is returned and that the result is sorted by
/// the name column regardless of insertion order.
///
/// Expected: Ok with courts in name order
#[tokio::test]
async fn returns_courts_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::court::CourtFactory::new(db)
        .name("Court B")
        .build()
        .await?;
    factory::court::CourtFactory::new(db)
        .name("Court A")
        .build()
        .await?;
    factory::court::CourtFactory::new(db)
        .name("Court C")
        .build()
        .await?;

    let repo = CourtRepository::new(db);
    let courts = repo.get_all().await?;

    let names: Vec<&str> = courts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Court A", "Court B", "Court C"]);

    Ok(())
}

/// Tests listing courts when none exist.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_when_no_courts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Court)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CourtRepository::new(db);
    let courts = repo.get_all().await?;

    assert!(courts.is_empty());

    Ok(())
}
