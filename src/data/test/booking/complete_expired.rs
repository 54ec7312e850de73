use super::*;

/// Tests completing confirmed bookings whose end time has passed.
///
/// Only confirmed bookings with an end time before the sweep instant may
/// be moved to `Completed`; future confirmed bookings and pending bookings
/// must be left alone.
///
/// Expected: Ok(1) with only the expired booking completed
#[tokio::test]
async fn completes_only_expired_confirmed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    let now = Utc::now();

    let expired = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now - Duration::hours(2), now - Duration::hours(1))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let upcoming = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now + Duration::hours(1), now + Duration::hours(2))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let stale_pending = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now - Duration::hours(2), now - Duration::hours(1))
        .build()
        .await?;

    let repo = BookingRepository::new(db);
    let count = repo.complete_expired(now).await?;

    assert_eq!(count, 1);

    let expired = repo.find_by_id(expired.id).await?.unwrap();
    assert_eq!(expired.status, BookingStatus::Completed);

    let upcoming = repo.find_by_id(upcoming.id).await?.unwrap();
    assert_eq!(upcoming.status, BookingStatus::Confirmed);

    let stale_pending = repo.find_by_id(stale_pending.id).await?.unwrap();
    assert_eq!(stale_pending.status, BookingStatus::Pending);

    Ok(())
}

/// Tests the sweep with nothing to complete.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_nothing_expired() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BookingRepository::new(db);
    let count = repo.complete_expired(Utc::now()).await?;

    assert_eq!(count, 0);

    Ok(())
}
