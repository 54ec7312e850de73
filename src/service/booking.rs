//! Booking service: window validation, lifecycle transitions, and the
//! status sweep.
//!
//! This is where a proposed reservation is judged legal or not. A window
//! must be strictly in the future, fit inside operating hours on a single
//! UTC day, land on an available court, and touch no other active booking
//! on that court.

use chrono::{DateTime, Timelike, Utc};
use sea_orm::DatabaseConnection;

use entity::{booking::BookingStatus, court::CourtStatus};

use crate::{
    data::{booking::BookingRepository, court::CourtRepository},
    error::{auth::AuthError, booking::BookingError, AppError},
    model::{
        booking::{can_transition, Booking, CreateBookingParams, SweepOutcome},
        court::Court,
        user::User,
    },
};

/// Operating-hours rules applied to every proposed booking window.
///
/// Hours are whole UTC hours; a window is acceptable when it starts no
/// earlier than `open_hour` and ends no later than `close_hour` on the same
/// calendar day. Constructed from configuration, which guarantees
/// `open_hour < close_hour <= 23`.
#[derive(Debug, Clone, Copy)]
pub struct BookingPolicy {
    open_hour: u32,
    close_hour: u32,
}

impl BookingPolicy {
    pub fn new(open_hour: u32, close_hour: u32) -> Self {
        Self {
            open_hour,
            close_hour,
        }
    }

    /// Checks a proposed window against the time rules.
    ///
    /// # Returns
    /// - `Ok(())` - Window is well-formed, in the future, and inside
    ///   operating hours
    /// - `Err(BookingError)` - The first rule the window violates
    pub fn validate_window(
        &self,
        now: DateTime<Utc>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<(), BookingError> {
        if end <= start {
            return Err(BookingError::EndNotAfterStart);
        }

        if start < now {
            return Err(BookingError::StartInPast);
        }

        let outside_hours = start.date_naive() != end.date_naive()
            || start.num_seconds_from_midnight() < self.open_hour * 3600
            || end.num_seconds_from_midnight() > self.close_hour * 3600;

        if outside_hours {
            return Err(BookingError::OutsideOperatingHours {
                open_hour: self.open_hour,
                close_hour: self.close_hour,
            });
        }

        Ok(())
    }
}

/// Service providing booking creation, queries, status management, and the
/// periodic status sweep.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
    policy: BookingPolicy,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection, policy: BookingPolicy) -> Self {
        Self { db, policy }
    }

    /// Creates a booking after running the full validation chain.
    ///
    /// The court must exist and be available, the window must pass the
    /// policy rules, and no pending or confirmed booking on the court may
    /// overlap the window. The booking is created as `Pending`.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The created booking
    /// - `Err(AppError::NotFound)`: Court does not exist
    /// - `Err(AppError::BookingErr)`: A validation rule failed
    pub async fn create(&self, params: CreateBookingParams) -> Result<Booking, AppError> {
        let court_repo = CourtRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        let court = court_repo
            .find_by_id(params.court_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

        if court.status != CourtStatus::Available {
            return Err(BookingError::CourtNotAvailable(court.status).into());
        }

        self.policy
            .validate_window(Utc::now(), params.start_time, params.end_time)?;

        let conflicts = booking_repo
            .find_overlapping(params.court_id, params.start_time, params.end_time)
            .await?;

        if !conflicts.is_empty() {
            return Err(BookingError::SlotTaken.into());
        }

        let booking = booking_repo.create(params).await?;

        Ok(Booking::from_entity(booking))
    }

    /// Returns active bookings for a court, optionally limited to one UTC
    /// day. Used by clients to render slot availability.
    ///
    /// # Returns
    /// - `Ok(bookings)`: Pending, confirmed, and completed bookings
    /// - `Err(AppError::NotFound)`: Court does not exist
    pub async fn get_for_court(
        &self,
        court_id: i32,
        date: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Booking>, AppError> {
        let court_repo = CourtRepository::new(self.db);

        if court_repo.find_by_id(court_id).await?.is_none() {
            return Err(AppError::NotFound("Court not found".to_string()));
        }

        let bookings = BookingRepository::new(self.db)
            .get_for_court(court_id, date)
            .await?;

        Ok(bookings.into_iter().map(Booking::from_entity).collect())
    }

    /// Returns all bookings made by a user with their courts, newest first.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<(Booking, Court)>, AppError> {
        let rows = BookingRepository::new(self.db).get_for_user(user_id).await?;

        Ok(rows
            .into_iter()
            .map(|(booking, court)| (Booking::from_entity(booking), Court::from_entity(court)))
            .collect())
    }

    /// Returns all bookings with user and court, optionally filtered by
    /// court and status. Backs the admin overview.
    pub async fn get_all(
        &self,
        court_id: Option<i32>,
        status: Option<BookingStatus>,
    ) -> Result<Vec<(Booking, User, Court)>, AppError> {
        let rows = BookingRepository::new(self.db)
            .get_all_filtered(court_id, status)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(booking, user, court)| {
                (
                    Booking::from_entity(booking),
                    User::from_entity(user),
                    Court::from_entity(court),
                )
            })
            .collect())
    }

    /// Applies a manual status change, enforcing the lifecycle rules.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The updated booking
    /// - `Err(AppError::NotFound)`: No booking with that id
    /// - `Err(AppError::BookingErr)`: The transition is not legal
    pub async fn update_status(
        &self,
        booking_id: i32,
        status: BookingStatus,
    ) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if !can_transition(booking.status, status) {
            return Err(BookingError::InvalidStatusTransition {
                from: booking.status,
                to: status,
            }
            .into());
        }

        let updated = repo.update_status(booking, status).await?;

        Ok(Booking::from_entity(updated))
    }

    /// Cancels a booking on behalf of a user.
    ///
    /// Only the booking's owner or an admin may cancel, and only bookings
    /// that are still pending or confirmed can be cancelled.
    ///
    /// # Returns
    /// - `Ok(Booking)`: The cancelled booking
    /// - `Err(AppError::NotFound)`: No booking with that id
    /// - `Err(AppError::AuthErr)`: Caller is neither owner nor admin
    /// - `Err(AppError::BookingErr)`: Booking is already terminal
    pub async fn cancel(
        &self,
        booking_id: i32,
        user_id: i32,
        is_admin: bool,
    ) -> Result<Booking, AppError> {
        let repo = BookingRepository::new(self.db);

        let booking = repo
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))?;

        if booking.user_id != user_id && !is_admin {
            return Err(AuthError::AccessDenied(
                user_id,
                format!(
                    "User attempted to cancel booking {} owned by user {}",
                    booking_id, booking.user_id
                ),
            )
            .into());
        }

        if !can_transition(booking.status, BookingStatus::Cancelled) {
            return Err(BookingError::InvalidStatusTransition {
                from: booking.status,
                to: BookingStatus::Cancelled,
            }
            .into());
        }

        let updated = repo.update_status(booking, BookingStatus::Cancelled).await?;

        Ok(Booking::from_entity(updated))
    }

}

/// Runs one status sweep at the given instant.
///
/// Confirmed bookings past their end time become `Completed`; pending
/// bookings past their start time become `Cancelled`. Two batch updates, no
/// per-row work. Free-standing because the sweep needs no operating-hours
/// policy, only the clock.
pub async fn sweep(db: &DatabaseConnection, now: DateTime<Utc>) -> Result<SweepOutcome, AppError> {
    let repo = BookingRepository::new(db);

    let completed = repo.complete_expired(now).await?;
    let cancelled = repo.cancel_stale_pending(now).await?;

    Ok(SweepOutcome {
        completed,
        cancelled,
    })
}
