//! Court factory for creating test court entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use entity::court::CourtStatus;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test courts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::court::CourtFactory;
///
/// let court = CourtFactory::new(&db)
///     .status(CourtStatus::Maintenance)
///     .build()
///     .await?;
/// ```
pub struct CourtFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    location: String,
    status: CourtStatus,
}

impl<'a> CourtFactory<'a> {
    /// Creates a new CourtFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Court {id}"` where id is auto-incremented
    /// - location: `"Hall {id}"`
    /// - status: `CourtStatus::Available`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Court {}", id),
            location: format!("Hall {}", id),
            status: CourtStatus::Available,
        }
    }

    /// Sets the name for the court.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the location for the court.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the operational status for the court.
    pub fn status(mut self, status: CourtStatus) -> Self {
        self.status = status;
        self
    }

    /// Builds and inserts the court entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::court::Model)` - Created court entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::court::Model, DbErr> {
        let now = Utc::now();
        entity::court::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            location: ActiveValue::Set(self.location),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a court with default values.
///
/// Shorthand for `CourtFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::court::Model)` - Created court entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_court(db: &DatabaseConnection) -> Result<entity::court::Model, DbErr> {
    CourtFactory::new(db).build().await
}

/// Creates a court with a specific operational status.
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - Operational status for the court
///
/// # Returns
/// - `Ok(entity::court::Model)` - Created court entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_court_with_status(
    db: &DatabaseConnection,
    status: CourtStatus,
) -> Result<entity::court::Model, DbErr> {
    CourtFactory::new(db).status(status).build().await
}
