//! Booking factory for creating test booking entities.
//!
//! Bookings reference a user and a court, so callers must create those first
//! (or use `helpers::create_booking_with_dependencies`).

use chrono::{DateTime, Duration, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bookings with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::booking::BookingFactory;
///
/// let booking = BookingFactory::new(&db, user.id, court.id)
///     .window(start, start + Duration::hours(1))
///     .status(BookingStatus::Confirmed)
///     .build()
///     .await?;
/// ```
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    court_id: i32,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    status: BookingStatus,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - start_time: one day from now
    /// - end_time: one hour after start_time
    /// - status: `BookingStatus::Pending`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user owning the booking
    /// - `court_id` - ID of the court being booked
    pub fn new(db: &'a DatabaseConnection, user_id: i32, court_id: i32) -> Self {
        let start = Utc::now() + Duration::days(1);
        Self {
            db,
            user_id,
            court_id,
            start_time: start,
            end_time: start + Duration::hours(1),
            status: BookingStatus::Pending,
        }
    }

    /// Sets the booked time window.
    pub fn window(mut self, start_time: DateTime<Utc>, end_time: DateTime<Utc>) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    /// Sets the lifecycle status for the booking.
    pub fn status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();
        entity::booking::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            court_id: ActiveValue::Set(self.court_id),
            start_time: ActiveValue::Set(self.start_time),
            end_time: ActiveValue::Set(self.end_time),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a booking with default values for the given user and court.
///
/// Shorthand for `BookingFactory::new(db, user_id, court_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user owning the booking
/// - `court_id` - ID of the court being booked
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    court_id: i32,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, court_id).build().await
}

/// Creates a booking with a specific status.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user owning the booking
/// - `court_id` - ID of the court being booked
/// - `status` - Lifecycle status for the booking
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking_with_status(
    db: &DatabaseConnection,
    user_id: i32,
    court_id: i32,
    status: BookingStatus,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, user_id, court_id)
        .status(status)
        .build()
        .await
}
