use crate::{
    error::{auth::AuthError, booking::BookingError, AppError},
    model::booking::CreateBookingParams,
    service::booking::{BookingPolicy, BookingService},
};
use chrono::{DateTime, Duration, Utc};
use entity::{booking::BookingStatus, court::CourtStatus};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod sweep;
mod validate_window;

/// Returns a window two days out at 10:00-11:00 UTC, safely inside the
/// default test policy of 8:00-22:00.
fn future_window() -> (DateTime<Utc>, DateTime<Utc>) {
    let day = (Utc::now() + Duration::days(2)).date_naive();
    let start = day.and_hms_opt(10, 0, 0).unwrap().and_utc();
    (start, start + Duration::hours(1))
}

fn test_policy() -> BookingPolicy {
    BookingPolicy::new(8, 22)
}
