use super::*;

/// Tests setting the status of a loaded booking.
///
/// Verifies that the status column changes and the updated timestamp is
/// refreshed, without another read of the row.
///
/// Expected: Ok with updated booking
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _court, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    let updated = repo
        .update_status(booking.clone(), BookingStatus::Confirmed)
        .await?;

    assert_eq!(updated.id, booking.id);
    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert!(updated.updated_at >= booking.updated_at);

    Ok(())
}

/// Tests that a status change is persisted.
///
/// The new status must be visible to a later read, not only on the
/// returned model.
///
/// Expected: Ok with the stored row updated
#[tokio::test]
async fn persists_status_change() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_user, _court, booking) = factory::helpers::create_booking_with_dependencies(db).await?;

    let repo = BookingRepository::new(db);
    repo.update_status(booking.clone(), BookingStatus::Cancelled)
        .await?;

    let stored = repo.find_by_id(booking.id).await?.unwrap();
    assert_eq!(stored.status, BookingStatus::Cancelled);

    Ok(())
}
