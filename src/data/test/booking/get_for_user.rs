use super::*;

/// Tests listing a user's bookings with their courts.
///
/// Bookings must come back newest first, each paired with its court, and
/// bookings made by other users must be excluded.
///
/// Expected: Ok with the user's bookings in descending start order
#[tokio::test]
async fn returns_own_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    let base = Utc::now() + Duration::days(1);

    let early = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(base, base + Duration::hours(1))
        .build()
        .await?;
    let late = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(base + Duration::hours(2), base + Duration::hours(3))
        .build()
        .await?;
    factory::create_booking(db, other.id, court.id).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.get_for_user(user.id).await?;

    let ids: Vec<i32> = rows.iter().map(|(b, _)| b.id).collect();
    assert_eq!(ids, vec![late.id, early.id]);
    assert!(rows.iter().all(|(_, c)| c.id == court.id));

    Ok(())
}

/// Tests listing bookings for a user who has none.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_user_without_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.get_for_user(user.id).await?;

    assert!(rows.is_empty());

    Ok(())
}
