use sea_orm::DatabaseConnection;

use crate::{data::court::CourtRepository, error::AppError, model::court::Court};

/// Service providing read access to courts.
pub struct CourtService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourtService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all courts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<Court>, AppError> {
        let courts = CourtRepository::new(self.db).get_all().await?;
        Ok(courts.into_iter().map(Court::from_entity).collect())
    }

    /// Returns a single court by id.
    ///
    /// # Returns
    /// - `Ok(Some(Court))`: Court found
    /// - `Ok(None)`: No court with that id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Court>, AppError> {
        let court = CourtRepository::new(self.db).find_by_id(id).await?;
        Ok(court.map(Court::from_entity))
    }
}
