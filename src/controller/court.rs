use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::{
        api::SuccessDto,
        booking::{BookingsPayload, CourtBookingsQuery},
        court::{CourtPayload, CourtsPayload},
    },
    service::{booking::BookingService, court::CourtService},
    state::AppState,
};

/// GET /api/courts
/// List all courts
pub async fn get_all_courts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let court_service = CourtService::new(&state.db);
    let courts = court_service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(CourtsPayload {
            courts: courts.into_iter().map(|c| c.into_dto()).collect(),
        })),
    ))
}

/// GET /api/courts/{court_id}
/// Get a single court
pub async fn get_court(
    State(state): State<AppState>,
    Path(court_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let court_service = CourtService::new(&state.db);
    let court = court_service
        .get_by_id(court_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Court not found".to_string()))?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(CourtPayload {
            court: court.into_dto(),
        })),
    ))
}

/// GET /api/courts/{court_id}/bookings?date=YYYY-MM-DD
/// List a court's active bookings, optionally for a single UTC day
pub async fn get_court_bookings(
    State(state): State<AppState>,
    Path(court_id): Path<i32>,
    Query(query): Query<CourtBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let booking_service = BookingService::new(&state.db, state.booking_policy);
    let bookings = booking_service.get_for_court(court_id, query.date).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(BookingsPayload {
            bookings: bookings.into_iter().map(|b| b.into_dto()).collect(),
        })),
    ))
}
