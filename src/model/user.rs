//! User domain models and parameters.
//!
//! Provides the domain model for application users plus the parameter and DTO
//! types used during registration, login, and profile responses. The password
//! hash never leaves the data layer through these types.

use chrono::{DateTime, Utc};
use entity::user::UserRole;
use serde::{Deserialize, Serialize};

use crate::model::api::FieldErrorDto;

const NAME_MIN: usize = 4;
const NAME_MAX: usize = 50;
const PASSWORD_MIN: usize = 5;
const PASSWORD_MAX: usize = 100;

/// Application user with role and audit timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository
    /// boundary, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            email: self.email,
            role: self.role,
        }
    }
}

/// User representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Payload wrapper for single-user responses: `{"user": ...}`.
#[derive(Serialize)]
pub struct UserPayload {
    pub user: UserDto,
}

/// Request body for `POST /api/auth/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterUserDto {
    /// Validates the registration fields, mirroring the limits enforced by
    /// the web client: name 4-50 characters, a plausible email address, and
    /// password 5-100 characters.
    ///
    /// # Returns
    /// - `Ok(())` - All fields pass validation
    /// - `Err(errors)` - One entry per failed field
    pub fn validate(&self) -> Result<(), Vec<FieldErrorDto>> {
        let mut errors = Vec::new();

        if self.name.chars().count() < NAME_MIN {
            errors.push(FieldErrorDto {
                field: "name",
                message: format!("Name must be at least {} characters", NAME_MIN),
            });
        } else if self.name.chars().count() > NAME_MAX {
            errors.push(FieldErrorDto {
                field: "name",
                message: format!("Name must be at most {} characters", NAME_MAX),
            });
        }

        if !is_plausible_email(&self.email) {
            errors.push(FieldErrorDto {
                field: "email",
                message: "Invalid email address".to_string(),
            });
        }

        if self.password.chars().count() < PASSWORD_MIN {
            errors.push(FieldErrorDto {
                field: "password",
                message: format!("Password must be at least {} characters", PASSWORD_MIN),
            });
        } else if self.password.chars().count() > PASSWORD_MAX {
            errors.push(FieldErrorDto {
                field: "password",
                message: format!("Password must be at most {} characters", PASSWORD_MAX),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginUserDto {
    pub email: String,
    pub password: String,
}

/// Parameters for inserting a new user row.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// A non-empty local part and a dot-bearing domain. Deliverability is the
/// mail server's problem, not the API's.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
