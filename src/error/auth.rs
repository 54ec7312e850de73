use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user id stored in the session.
    ///
    /// The request requires authentication but the session carries no user.
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a user that no longer exists.
    ///
    /// The session carries a user id that is not present in the database,
    /// typically after account deletion. Results in a 401 Unauthorized
    /// response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Email/password pair did not match a stored credential.
    ///
    /// Covers both an unknown email and a wrong password so the response
    /// does not reveal which accounts exist. Results in a 401 Unauthorized
    /// response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Authenticated user lacks the required permission.
    ///
    /// Results in a 403 Forbidden response; the detailed reason is logged
    /// server-side only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic to avoid leaking which accounts exist
/// or why access was refused; the full error is logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        match self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not logged in".to_string())),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid email or password".to_string())),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Forbidden".to_string())),
            )
                .into_response(),
        }
    }
}
