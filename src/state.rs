//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each
//! request handler through Axum's state extraction. All fields are cheap to
//! clone: `DatabaseConnection` is a connection pool and `BookingPolicy` is
//! `Copy`.

use sea_orm::DatabaseConnection;

use crate::service::booking::BookingPolicy;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Operating-hours rules applied to proposed booking windows.
    pub booking_policy: BookingPolicy,
}

impl AppState {
    pub fn new(db: DatabaseConnection, booking_policy: BookingPolicy) -> Self {
        Self { db, booking_policy }
    }
}
