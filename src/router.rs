use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::{
    controller::{auth, booking, court},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/courts", get(court::get_all_courts))
        // Static segment wins over {court_id}, so the admin booking routes
        // can live under /api/courts/bookings
        .route("/api/courts/bookings", get(booking::get_all_bookings))
        .route(
            "/api/courts/bookings/{booking_id}",
            put(booking::update_booking_status),
        )
        .route("/api/courts/{court_id}", get(court::get_court))
        .route(
            "/api/courts/{court_id}/bookings",
            get(court::get_court_bookings).post(booking::create_booking),
        )
        .route("/api/bookings", get(booking::get_my_bookings))
        .route("/api/bookings/{booking_id}", delete(booking::cancel_booking))
}
