use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};

pub struct CourtRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourtRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns all courts ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::court::Model>, DbErr> {
        entity::prelude::Court::find()
            .order_by_asc(entity::court::Column::Name)
            .all(self.db)
            .await
    }

    /// Finds a court by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::court::Model>, DbErr> {
        entity::prelude::Court::find_by_id(id).one(self.db).await
    }
}
