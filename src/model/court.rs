//! Court domain models.

use entity::court::CourtStatus;
use serde::Serialize;

/// A bookable court with its operational status.
#[derive(Debug, Clone, PartialEq)]
pub struct Court {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub status: CourtStatus,
}

impl Court {
    /// Converts an entity model to a court domain model at the repository
    /// boundary.
    pub fn from_entity(entity: entity::court::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            location: entity.location,
            status: entity.status,
        }
    }

    pub fn into_dto(self) -> CourtDto {
        CourtDto {
            id: self.id,
            name: self.name,
            location: self.location,
            status: self.status,
        }
    }
}

/// Court representation returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct CourtDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub status: CourtStatus,
}

/// Payload wrapper for court list responses: `{"courts": [...]}`.
#[derive(Serialize)]
pub struct CourtsPayload {
    pub courts: Vec<CourtDto>,
}

/// Payload wrapper for single-court responses: `{"court": ...}`.
#[derive(Serialize)]
pub struct CourtPayload {
    pub court: CourtDto,
}
