use super::*;

/// Tests creating a booking that passes every validation rule.
///
/// Expected: Ok with a pending booking
#[tokio::test]
async fn creates_booking_when_valid() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;
    let (start, end) = future_window();

    let service = BookingService::new(db, test_policy());
    let booking = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: start,
            end_time: end,
        })
        .await?;

    assert_eq!(booking.user_id, user.id);
    assert_eq!(booking.court_id, court.id);
    assert_eq!(booking.status, BookingStatus::Pending);

    Ok(())
}

/// Tests booking a court that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn rejects_unknown_court() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (start, end) = future_window();

    let service = BookingService::new(db, test_policy());
    let result = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: 999,
            start_time: start,
            end_time: end,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests booking a court that is under maintenance.
///
/// Expected: Err with CourtNotAvailable
#[tokio::test]
async fn rejects_unavailable_court() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::court::create_court_with_status(db, CourtStatus::Maintenance).await?;
    let (start, end) = future_window();

    let service = BookingService::new(db, test_policy());
    let result = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: start,
            end_time: end,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::CourtNotAvailable(
            CourtStatus::Maintenance
        )))
    ));

    Ok(())
}

/// Tests booking a window already taken by another active booking.
///
/// Expected: Err with SlotTaken
#[tokio::test]
async fn rejects_overlapping_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;
    let (start, end) = future_window();

    factory::booking::BookingFactory::new(db, other.id, court.id)
        .window(start, end)
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let service = BookingService::new(db, test_policy());
    let result = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: start + Duration::minutes(30),
            end_time: end + Duration::minutes(30),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotTaken))
    ));

    Ok(())
}

/// Tests booking a window that starts exactly when another ends.
///
/// Back-to-back reservations are legal; sharing a boundary is not an
/// overlap.
///
/// Expected: Ok
#[tokio::test]
async fn allows_adjacent_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;
    let (start, end) = future_window();

    factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(start, end)
        .build()
        .await?;

    let service = BookingService::new(db, test_policy());
    let result = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: end,
            end_time: end + Duration::hours(1),
        })
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests booking a window in the past.
///
/// Expected: Err with StartInPast
#[tokio::test]
async fn rejects_past_start() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    let service = BookingService::new(db, test_policy());
    let result = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: Utc::now() - Duration::hours(2),
            end_time: Utc::now() - Duration::hours(1),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::StartInPast))
    ));

    Ok(())
}

/// Tests booking a window that ends before it starts.
///
/// Expected: Err with EndNotAfterStart
#[tokio::test]
async fn rejects_reversed_window() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;
    let (start, end) = future_window();

    let service = BookingService::new(db, test_policy());
    let result = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: end,
            end_time: start,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::EndNotAfterStart))
    ));

    Ok(())
}

/// Tests booking a window before the court opens.
///
/// Expected: Err with OutsideOperatingHours
#[tokio::test]
async fn rejects_window_outside_hours() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    let day = (Utc::now() + Duration::days(2)).date_naive();
    let start = day.and_hms_opt(6, 0, 0).unwrap().and_utc();

    let service = BookingService::new(db, test_policy());
    let result = service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id: court.id,
            start_time: start,
            end_time: start + Duration::hours(1),
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::OutsideOperatingHours { .. }))
    ));

    Ok(())
}
