use super::*;

/// Tests the unfiltered admin booking overview.
///
/// All bookings must be returned, each joined with its user and court.
///
/// Expected: Ok with every booking and its relations
#[tokio::test]
async fn returns_all_bookings_with_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user_a, court_a, booking_a) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    let (user_b, court_b, booking_b) =
        factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.get_all_filtered(None, None).await?;

    assert_eq!(rows.len(), 2);
    for (booking, user, court) in &rows {
        if booking.id == booking_a.id {
            assert_eq!(user.id, user_a.id);
            assert_eq!(court.id, court_a.id);
        } else {
            assert_eq!(booking.id, booking_b.id);
            assert_eq!(user.id, user_b.id);
            assert_eq!(court.id, court_b.id);
        }
    }

    Ok(())
}

/// Tests filtering the overview by court.
///
/// Expected: Ok with only bookings on the requested court
#[tokio::test]
async fn filters_by_court() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user_a, court_a, booking_a) =
        factory::helpers::create_booking_with_dependencies(db).await?;
    factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let rows = repo.get_all_filtered(Some(court_a.id), None).await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, booking_a.id);

    Ok(())
}

/// Tests filtering the overview by status.
///
/// Expected: Ok with only bookings in the requested status
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    factory::create_booking(db, user.id, court.id).await?;
    let confirmed = factory::booking::create_booking_with_status(
        db,
        user.id,
        court.id,
        BookingStatus::Confirmed,
    )
    .await?;

    let repo = BookingRepository::new(db);
    let rows = repo
        .get_all_filtered(None, Some(BookingStatus::Confirmed))
        .await?;

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].0.id, confirmed.id);

    Ok(())
}
