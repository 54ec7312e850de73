use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::{auth::AuthGuard, session::AuthSession},
    model::{
        api::{MessageDto, SuccessDto},
        user::{LoginUserDto, RegisterUserDto, User, UserPayload},
    },
    service::user::UserService,
    state::AppState,
};

/// POST /api/auth/register
/// Create a new user account
pub async fn register(
    State(state): State<AppState>,
    Json(dto): Json<RegisterUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    user_service.register(dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto::new("User created successfully")),
    ))
}

/// POST /api/auth/login
/// Verify credentials and establish a session
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(dto): Json<LoginUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let user = user_service
        .verify_credentials(&dto.email, &dto.password)
        .await?;

    AuthSession::new(&session).set_user_id(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(UserPayload {
            user: user.into_dto(),
        })),
    ))
}

/// POST /api/auth/logout
/// Clear the session
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((
        StatusCode::OK,
        Json(MessageDto::new("User logged out successfully")),
    ))
}

/// GET /api/auth/me
/// Get the currently authenticated user
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto::new(UserPayload {
            user: User::from_entity(user).into_dto(),
        })),
    ))
}
