//! Booking repository implementation.
//!
//! Booking creation is deliberately absent from this trait: inserts
//! only happen inside a serializable transaction so the overlap
//! check and the insert commit as one unit (see the unit of work's
//! transaction-scoped repository).

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::booking::{self, ActiveModel, Entity as BookingEntity};
use crate::domain::{Booking, BookingStatus};
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Booking repository trait for dependency injection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Find booking by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>>;

    /// List a user's bookings, most recent date first, then latest
    /// start time first
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Booking>>;

    /// Set a booking's status and re-stamp `updated_at`
    async fn set_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking>;
}

/// Concrete implementation of BookingRepository
pub struct BookingStore {
    db: DatabaseConnection,
}

impl BookingStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for BookingStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Booking>> {
        let result = BookingEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Booking::from))
    }

    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Booking>> {
        let models = BookingEntity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::BookingDate)
            .order_by_desc(booking::Column::StartTime)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Booking::from).collect())
    }

    async fn set_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking> {
        let model = BookingEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound("Booking"))?;

        let mut active: ActiveModel = model.into();
        active.status = Set(i32::from(status));
        active.updated_at = Set(chrono::Utc::now());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Booking::from(model))
    }
}
