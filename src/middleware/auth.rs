use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use entity::user::UserRole;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::SESSION_AUTH_USER_ID,
};

/// Permissions a handler can demand beyond being logged in.
pub enum Permission {
    Admin,
}

/// Guard resolving the session to a database user and checking permissions.
///
/// Handlers construct one per request and call `require` with the
/// permissions they need; an empty slice means "any logged-in user".
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Resolves the current user and verifies the required permissions.
    ///
    /// # Returns
    /// - `Ok(Model)` - The authenticated user satisfying all permissions
    /// - `Err(AuthError::UserNotInSession)` - No user id in the session
    /// - `Err(AuthError::UserNotInDatabase)` - Session user no longer exists
    /// - `Err(AuthError::AccessDenied)` - A required permission is missing
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = self.session.get::<i32>(SESSION_AUTH_USER_ID).await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if user.role != UserRole::Admin {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin operation without the admin role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
