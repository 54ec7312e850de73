use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use entity::booking::BookingStatus;

use crate::model::booking::CreateBookingParams;

/// Statuses that occupy a time slot. Cancelled and completed bookings never
/// block a new reservation.
const ACTIVE_STATUSES: [BookingStatus; 2] = [BookingStatus::Pending, BookingStatus::Confirmed];

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new booking with status `Pending`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The created booking
    /// - `Err(DbErr)`: Database error (including foreign key violations)
    pub async fn create(
        &self,
        params: CreateBookingParams,
    ) -> Result<entity::booking::Model, DbErr> {
        let now = Utc::now();

        entity::booking::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            court_id: ActiveValue::Set(params.court_id),
            start_time: ActiveValue::Set(params.start_time),
            end_time: ActiveValue::Set(params.end_time),
            status: ActiveValue::Set(BookingStatus::Pending),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds a booking by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find_by_id(id).one(self.db).await
    }

    /// Returns active bookings on a court that intersect the given window.
    ///
    /// Two windows overlap when each starts before the other ends; bookings
    /// that merely share a boundary with the window do not count.
    ///
    /// # Arguments
    /// - `court_id`: Court to check
    /// - `start`, `end`: Proposed reservation window
    ///
    /// # Returns
    /// - `Ok(bookings)`: Pending or confirmed bookings overlapping the window
    /// - `Err(DbErr)`: Database error
    pub async fn find_overlapping(
        &self,
        court_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        entity::prelude::Booking::find()
            .filter(entity::booking::Column::CourtId.eq(court_id))
            .filter(entity::booking::Column::Status.is_in(ACTIVE_STATUSES))
            .filter(entity::booking::Column::StartTime.lt(end))
            .filter(entity::booking::Column::EndTime.gt(start))
            .all(self.db)
            .await
    }

    /// Returns active bookings for a court, ordered by start time.
    ///
    /// Cancelled bookings are excluded so the result reflects actual slot
    /// occupancy. When `date` is given, only bookings starting on that UTC
    /// day are returned.
    pub async fn get_for_court(
        &self,
        court_id: i32,
        date: Option<NaiveDate>,
    ) -> Result<Vec<entity::booking::Model>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::CourtId.eq(court_id))
            .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled));

        if let Some(date) = date {
            let day_start = date.and_time(NaiveTime::MIN).and_utc();
            let day_end = day_start + Duration::days(1);
            query = query
                .filter(entity::booking::Column::StartTime.gte(day_start))
                .filter(entity::booking::Column::StartTime.lt(day_end));
        }

        query
            .order_by_asc(entity::booking::Column::StartTime)
            .all(self.db)
            .await
    }

    /// Returns all bookings made by a user together with their courts,
    /// newest first.
    pub async fn get_for_user(
        &self,
        user_id: i32,
    ) -> Result<Vec<(entity::booking::Model, entity::court::Model)>, DbErr> {
        let rows = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::StartTime)
            .find_also_related(entity::prelude::Court)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(booking, court)| court.map(|c| (booking, c)))
            .collect())
    }

    /// Returns all bookings with their user and court, optionally filtered
    /// by court and status. Backs the admin booking overview.
    pub async fn get_all_filtered(
        &self,
        court_id: Option<i32>,
        status: Option<BookingStatus>,
    ) -> Result<
        Vec<(
            entity::booking::Model,
            entity::user::Model,
            entity::court::Model,
        )>,
        DbErr,
    > {
        let mut query = entity::prelude::Booking::find();

        if let Some(court_id) = court_id {
            query = query.filter(entity::booking::Column::CourtId.eq(court_id));
        }
        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status));
        }

        let bookings = query
            .order_by_desc(entity::booking::Column::StartTime)
            .all(self.db)
            .await?;

        let user_ids: Vec<i32> = bookings.iter().map(|b| b.user_id).collect();
        let court_ids: Vec<i32> = bookings.iter().map(|b| b.court_id).collect();

        let users: HashMap<i32, entity::user::Model> = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let courts: HashMap<i32, entity::court::Model> = entity::prelude::Court::find()
            .filter(entity::court::Column::Id.is_in(court_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        Ok(bookings
            .into_iter()
            .filter_map(|booking| {
                let user = users.get(&booking.user_id).cloned()?;
                let court = courts.get(&booking.court_id).cloned()?;
                Some((booking, user, court))
            })
            .collect())
    }

    /// Sets the status of an already-loaded booking.
    ///
    /// Callers fetch the booking first to check the lifecycle rules, so
    /// the row is written directly from that model rather than fetched
    /// again.
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated booking
    pub async fn update_status(
        &self,
        booking: entity::booking::Model,
        status: BookingStatus,
    ) -> Result<entity::booking::Model, DbErr> {
        let mut active_model: entity::booking::ActiveModel = booking.into();
        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.db).await
    }

    /// Completes all confirmed bookings whose end time has passed.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of bookings moved to `Completed`
    pub async fn complete_expired(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Completed),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Confirmed))
            .filter(entity::booking::Column::EndTime.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Cancels all pending bookings whose start time has passed without
    /// confirmation.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of bookings moved to `Cancelled`
    pub async fn cancel_stale_pending(&self, now: DateTime<Utc>) -> Result<u64, DbErr> {
        let result = entity::prelude::Booking::update_many()
            .col_expr(
                entity::booking::Column::Status,
                Expr::value(BookingStatus::Cancelled),
            )
            .col_expr(entity::booking::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking::Column::Status.eq(BookingStatus::Pending))
            .filter(entity::booking::Column::StartTime.lt(now))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
