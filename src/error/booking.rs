use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use entity::{booking::BookingStatus, court::CourtStatus};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Violations of the booking rules.
///
/// Raised by the booking service when a proposed reservation window or a
/// requested status change is not legal. Each variant maps to its own HTTP
/// status: slot contention is a 409 Conflict, window and lifecycle rule
/// violations are 422 Unprocessable Entity.
#[derive(Error, Debug)]
pub enum BookingError {
    /// The requested window ends at or before it starts.
    #[error("Booking end time must be after start time")]
    EndNotAfterStart,

    /// The requested window starts in the past.
    #[error("Bookings cannot be made in the past")]
    StartInPast,

    /// The requested window falls outside operating hours, or spans
    /// more than one day.
    #[error("Bookings must fall between {open_hour}:00 and {close_hour}:00 UTC on a single day")]
    OutsideOperatingHours { open_hour: u32, close_hour: u32 },

    /// Another active booking already occupies part of the window.
    #[error("The requested time slot is already booked")]
    SlotTaken,

    /// The court is not open for bookings.
    #[error("Court is not available for booking (status: {0:?})")]
    CourtNotAvailable(CourtStatus),

    /// The requested status change is not a legal lifecycle transition.
    #[error("Cannot change booking status from {from:?} to {to:?}")]
    InvalidStatusTransition {
        from: BookingStatus,
        to: BookingStatus,
    },
}

impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::SlotTaken | Self::CourtNotAvailable(_) => StatusCode::CONFLICT,
            Self::EndNotAfterStart
            | Self::StartInPast
            | Self::OutsideOperatingHours { .. }
            | Self::InvalidStatusTransition { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };

        (status, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
