use super::*;

use crate::service::booking::sweep;

/// Tests one sweep over a mixed set of bookings.
///
/// The expired confirmed booking becomes completed, the stale pending one
/// becomes cancelled, and future bookings keep their status. The outcome
/// reports one row for each batch.
///
/// Expected: Ok(SweepOutcome { completed: 1, cancelled: 1 })
#[tokio::test]
async fn sweeps_expired_and_stale_bookings() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    let now = Utc::now();

    let expired = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now - Duration::hours(3), now - Duration::hours(2))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let stale = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now - Duration::hours(1), now + Duration::hours(1))
        .build()
        .await?;
    let upcoming_confirmed = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now + Duration::hours(1), now + Duration::hours(2))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;
    let upcoming_pending = factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now + Duration::hours(3), now + Duration::hours(4))
        .build()
        .await?;

    let outcome = sweep(db, now).await?;

    assert_eq!(outcome.completed, 1);
    assert_eq!(outcome.cancelled, 1);

    let repo = crate::data::booking::BookingRepository::new(db);
    assert_eq!(
        repo.find_by_id(expired.id).await?.unwrap().status,
        BookingStatus::Completed
    );
    assert_eq!(
        repo.find_by_id(stale.id).await?.unwrap().status,
        BookingStatus::Cancelled
    );
    assert_eq!(
        repo.find_by_id(upcoming_confirmed.id).await?.unwrap().status,
        BookingStatus::Confirmed
    );
    assert_eq!(
        repo.find_by_id(upcoming_pending.id).await?.unwrap().status,
        BookingStatus::Pending
    );

    Ok(())
}

/// Tests that a second sweep finds nothing left to do.
///
/// Expected: Ok(SweepOutcome { completed: 0, cancelled: 0 })
#[tokio::test]
async fn second_sweep_is_a_no_op() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let court = factory::create_court(db).await?;

    let now = Utc::now();

    factory::booking::BookingFactory::new(db, user.id, court.id)
        .window(now - Duration::hours(3), now - Duration::hours(2))
        .status(BookingStatus::Confirmed)
        .build()
        .await?;

    let first = sweep(db, now).await?;
    assert_eq!(first.completed, 1);

    let second = sweep(db, now).await?;
    assert_eq!(second.completed, 0);
    assert_eq!(second.cancelled, 0);

    Ok(())
}
