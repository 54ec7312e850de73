use super::*;

/// Tests creating a new booking.
///
/// Verifies that the repository inserts a booking row with the given user,
/// court, and window, and that the status is set to `Pending`.
///
/// Expected: Ok with pending booking created
#[tokio::test]
async fn creates_pending_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    let start = Utc::now() + Duration::days(1);
    let end = start + Duration::hours(1);

    let repo = BookingRepository::new(db);
    let result = repo
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: start,
            end_time: end,
        })
        .await;

    assert!(result.is_ok());
    let booking = result.unwrap();
    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.court_id, court.id);
    assert_eq!(booking.start_time, start);
    assert_eq!(booking.end_time, end);
    assert_eq!(booking.status, BookingStatus::Pending);

    Ok(())
}
