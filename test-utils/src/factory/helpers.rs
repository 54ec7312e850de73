//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a booking with all its dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as the booking owner)
/// 2. Court
/// 3. Booking
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, court, booking))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::court::Model,
        entity::booking::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let court = crate::factory::court::create_court(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, court.id).await?;

    Ok((user, court, booking))
}

/// Creates a booking with its court dependency for a specific user.
///
/// Useful when a test already has a user (for instance one stored in the
/// session) and needs a booking owned by that user.
///
/// # Arguments
/// - `db` - Database connection
/// - `user` - User entity to use as the booking owner
///
/// # Returns
/// - `Ok((court, booking))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_booking_for_user(
    db: &DatabaseConnection,
    user: &entity::user::Model,
) -> Result<(entity::court::Model, entity::booking::Model), DbErr> {
    let court = crate::factory::court::create_court(db).await?;
    let booking = crate::factory::booking::create_booking(db, user.id, court.id).await?;

    Ok((court, booking))
}
