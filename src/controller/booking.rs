use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use entity::user::UserRole;

use crate::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::{
        api::SuccessDto,
        booking::{
            AdminBookingDto, AdminBookingsQuery, BookingPayload, BookingsPayload,
            CreateBookingDto, CreateBookingParams, UpdateBookingStatusDto, UserBookingDto,
        },
    },
    service::booking::BookingService,
    state::AppState,
};

/// POST /api/courts/{court_id}/bookings
/// Book a time slot on a court
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Path(court_id): Path<i32>,
    Json(dto): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking_service = BookingService::new(&state.db, state.booking_policy);
    let booking = booking_service
        .create(CreateBookingParams {
            user_id: user.id,
            court_id,
            start_time: dto.start_time,
            end_time: dto.end_time,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SuccessDto::new(BookingPayload {
            booking: booking.into_dto(),
        })),
    ))
}

/// GET /api/bookings
/// List the caller's bookings with their courts, newest first
pub async fn get_my_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking_service = BookingService::new(&state.db, state.booking_policy);
    let bookings = booking_service.get_for_user(user.id).await?;

    let bookings: Vec<UserBookingDto> = bookings
        .into_iter()
        .map(|(booking, court)| UserBookingDto {
            booking: booking.into_dto(),
            court: court.into_dto(),
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(BookingsPayload { bookings })),
    ))
}

/// DELETE /api/bookings/{booking_id}
/// Cancel a booking (owner or admin)
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking_service = BookingService::new(&state.db, state.booking_policy);
    let booking = booking_service
        .cancel(booking_id, user.id, user.role == UserRole::Admin)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(BookingPayload {
            booking: booking.into_dto(),
        })),
    ))
}

/// GET /api/courts/bookings?courtId=&status=
/// Admin overview of all bookings with user and court embedded
pub async fn get_all_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AdminBookingsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let booking_service = BookingService::new(&state.db, state.booking_policy);
    let bookings = booking_service
        .get_all(query.court_id, query.status)
        .await?;

    let bookings: Vec<AdminBookingDto> = bookings
        .into_iter()
        .map(|(booking, user, court)| AdminBookingDto {
            booking: booking.into_dto(),
            user: user.into_dto(),
            court: court.into_dto(),
        })
        .collect();

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(BookingsPayload { bookings })),
    ))
}

/// PUT /api/courts/bookings/{booking_id}
/// Admin status change for a booking
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<i32>,
    Json(dto): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _admin = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let booking_service = BookingService::new(&state.db, state.booking_policy);
    let booking = booking_service.update_status(booking_id, dto.status).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(BookingPayload {
            booking: booking.into_dto(),
        })),
    ))
}
