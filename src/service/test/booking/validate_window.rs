use super::*;

/// Tests a window filling the entire operating day.
///
/// Starting exactly at the open hour and ending exactly at the close hour
/// is legal.
///
/// Expected: Ok
#[test]
fn accepts_boundary_window() {
    let day = (Utc::now() + Duration::days(2)).date_naive();
    let start = day.and_hms_opt(8, 0, 0).unwrap().and_utc();
    let end = day.and_hms_opt(22, 0, 0).unwrap().and_utc();

    let result = test_policy().validate_window(Utc::now(), start, end);

    assert!(result.is_ok());
}

/// Tests a window crossing midnight.
///
/// Windows must fall on a single UTC day even when both endpoints are
/// inside operating hours on their respective days.
///
/// Expected: Err with OutsideOperatingHours
#[test]
fn rejects_cross_midnight_window() {
    let day = (Utc::now() + Duration::days(2)).date_naive();
    let start = day.and_hms_opt(21, 0, 0).unwrap().and_utc();
    let end = start + Duration::hours(12);

    let result = test_policy().validate_window(Utc::now(), start, end);

    assert!(matches!(
        result,
        Err(BookingError::OutsideOperatingHours { .. })
    ));
}

/// Tests a window ending after the close hour.
///
/// Expected: Err with OutsideOperatingHours
#[test]
fn rejects_window_past_close() {
    let day = (Utc::now() + Duration::days(2)).date_naive();
    let start = day.and_hms_opt(21, 30, 0).unwrap().and_utc();
    let end = day.and_hms_opt(22, 30, 0).unwrap().and_utc();

    let result = test_policy().validate_window(Utc::now(), start, end);

    assert!(matches!(
        result,
        Err(BookingError::OutsideOperatingHours { .. })
    ));
}

/// Tests a zero-length window.
///
/// Expected: Err with EndNotAfterStart
#[test]
fn rejects_zero_length_window() {
    let (start, _) = future_window();

    let result = test_policy().validate_window(Utc::now(), start, start);

    assert!(matches!(result, Err(BookingError::EndNotAfterStart)));
}

/// Tests that the end-before-start rule wins over the past-start rule.
///
/// A malformed window in the past must be reported as malformed first.
///
/// Expected: Err with EndNotAfterStart
#[test]
fn reports_malformed_window_before_past_start() {
    let now = Utc::now();

    let result = test_policy().validate_window(now, now - Duration::hours(1), now - Duration::hours(2));

    assert!(matches!(result, Err(BookingError::EndNotAfterStart)));
}
