use sea_orm::DatabaseConnection;

use entity::user::UserRole;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, RegisterUserDto, User},
};

/// Service providing registration and credential verification.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Validates the submitted fields, rejects duplicate emails, hashes the
    /// password with bcrypt, and stores the user with the `User` role.
    ///
    /// # Returns
    /// - `Ok(User)`: The created account
    /// - `Err(AppError::Validation)`: One or more fields failed validation
    /// - `Err(AppError::BadRequest)`: Email already registered
    pub async fn register(&self, dto: RegisterUserDto) -> Result<User, AppError> {
        dto.validate().map_err(AppError::Validation)?;

        let repo = UserRepository::new(self.db);

        if repo.find_by_email(&dto.email).await?.is_some() {
            return Err(AppError::BadRequest("Email already registered".to_string()));
        }

        let password_hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)?;

        let user = repo
            .create(CreateUserParams {
                name: dto.name,
                email: dto.email,
                password_hash,
                role: UserRole::User,
            })
            .await?;

        Ok(User::from_entity(user))
    }

    /// Verifies an email/password pair.
    ///
    /// The same error is returned for an unknown email and a wrong password
    /// so the endpoint does not reveal which accounts exist.
    ///
    /// # Returns
    /// - `Ok(User)`: Credentials match
    /// - `Err(AppError::AuthErr(InvalidCredentials))`: They don't
    pub async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(user) = repo.find_by_email(email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(User::from_entity(user))
    }

    /// Returns a user by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let user = UserRepository::new(self.db).find_by_id(id).await?;
        Ok(user.map(User::from_entity))
    }
}
