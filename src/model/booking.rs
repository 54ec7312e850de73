//! Booking domain models, lifecycle rules, and parameters.
//!
//! Besides the data-carrying types, this module owns the status lifecycle:
//! `can_transition` is the single source of truth for which manual status
//! changes are legal.

use chrono::{DateTime, NaiveDate, Utc};
use entity::booking::BookingStatus;
use serde::{Deserialize, Serialize};

use crate::model::{court::CourtDto, user::UserDto};

/// A court reservation window with its lifecycle status.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub court_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            court_id: entity.court_id,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status: entity.status,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            court_id: self.court_id,
            start_time: self.start_time,
            end_time: self.end_time,
            status: self.status,
        }
    }
}

/// Returns whether a manual status change is a legal lifecycle transition.
///
/// `Pending` bookings can be confirmed or cancelled; `Confirmed` bookings can
/// be cancelled or completed. `Cancelled` and `Completed` are terminal. A
/// no-op transition (same status) is not legal either.
pub fn can_transition(from: BookingStatus, to: BookingStatus) -> bool {
    matches!(
        (from, to),
        (BookingStatus::Pending, BookingStatus::Confirmed)
            | (BookingStatus::Pending, BookingStatus::Cancelled)
            | (BookingStatus::Confirmed, BookingStatus::Cancelled)
            | (BookingStatus::Confirmed, BookingStatus::Completed)
    )
}

/// Booking representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub court_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: BookingStatus,
}

/// Booking with its court embedded, as shown on the "my bookings" page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBookingDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub court: CourtDto,
}

/// Booking with both user and court embedded, for the admin listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingDto {
    #[serde(flatten)]
    pub booking: BookingDto,
    pub user: UserDto,
    pub court: CourtDto,
}

/// Payload wrapper for booking list responses: `{"bookings": [...]}`.
#[derive(Serialize)]
pub struct BookingsPayload<T: Serialize> {
    pub bookings: Vec<T>,
}

/// Payload wrapper for single-booking responses: `{"booking": ...}`.
#[derive(Serialize)]
pub struct BookingPayload {
    pub booking: BookingDto,
}

/// Request body for `POST /api/courts/{court_id}/bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Request body for `PUT /api/courts/bookings/{booking_id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}

/// Query parameters for `GET /api/courts/{court_id}/bookings`.
#[derive(Debug, Deserialize)]
pub struct CourtBookingsQuery {
    /// Restricts results to bookings starting on this UTC day.
    pub date: Option<NaiveDate>,
}

/// Query parameters for the admin listing `GET /api/courts/bookings`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminBookingsQuery {
    pub court_id: Option<i32>,
    pub status: Option<BookingStatus>,
}

/// Parameters for creating a new booking.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub user_id: i32,
    pub court_id: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Row counts reported by one status sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SweepOutcome {
    /// Confirmed bookings whose end time passed, now completed.
    pub completed: u64,
    /// Pending bookings whose start time passed unconfirmed, now cancelled.
    pub cancelled: u64,
}
