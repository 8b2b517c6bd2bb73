//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and transaction management. Two
//! workflows need transactions here: booking creation, where the
//! overlap check and the insert must commit as one serializable
//! unit so no concurrent creation for the same studio and date can
//! slip between them, and account deletion, which removes a user's
//! bookings together with the user row.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, IsolationLevel, QueryFilter, Set, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::{booking, studio, user};
use super::repositories::{
    BookingRepository, BookingStore, StudioRepository, StudioStore, UserRepository, UserStore,
};
use crate::domain::{Booking, BookingStatus, Studio, User};
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction
/// management. Note: this trait is not mockable directly due to
/// generic methods; tests mock the individual repositories instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get studio repository
    fn studios(&self) -> Arc<dyn StudioRepository>;

    /// Get booking repository
    fn bookings(&self) -> Arc<dyn BookingRepository>;

    /// Execute a closure within a ReadCommitted transaction.
    ///
    /// The transaction is committed on success and rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;

    /// Execute a closure within a Serializable transaction.
    ///
    /// Used where a read-check-write sequence must not interleave
    /// with concurrent writers, e.g. booking admission.
    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part
/// of the same database transaction.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository::new(self.txn)
    }

    /// Get studio repository for this transaction
    pub fn studios(&self) -> TxStudioRepository<'_> {
        TxStudioRepository::new(self.txn)
    }

    /// Get booking repository for this transaction
    pub fn bookings(&self) -> TxBookingRepository<'_> {
        TxBookingRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    studio_repo: Arc<StudioStore>,
    booking_repo: Arc<BookingStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let studio_repo = Arc::new(StudioStore::new(db.clone()));
        let booking_repo = Arc::new(BookingStore::new(db.clone()));
        Self {
            db,
            user_repo,
            studio_repo,
            booking_repo,
        }
    }

    async fn execute_transaction<F, T>(&self, isolation: IsolationLevel, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(isolation), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn studios(&self) -> Arc<dyn StudioRepository> {
        self.studio_repo.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingRepository> {
        self.booking_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::ReadCommitted, f)
            .await
    }

    async fn transaction_serializable<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        self.execute_transaction(IsolationLevel::Serializable, f)
            .await
    }
}

/// Transaction-aware user repository.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find user by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = user::Entity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    /// Permanently delete a user row
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = user::Entity::delete_by_id(id)
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("User"));
        }

        Ok(())
    }
}

/// Transaction-aware studio repository.
pub struct TxStudioRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxStudioRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Find studio by ID
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Studio>> {
        let result = studio::Entity::find_by_id(id)
            .one(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Studio::from))
    }
}

/// Transaction-aware booking repository.
pub struct TxBookingRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxBookingRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Load the non-cancelled bookings for a studio on a calendar date.
    ///
    /// This is the read half of the overlap check; it must run in the
    /// same transaction as the subsequent insert.
    pub async fn find_active_for_studio_date(
        &self,
        studio_id: i32,
        date: NaiveDate,
    ) -> AppResult<Vec<Booking>> {
        let models = booking::Entity::find()
            .filter(booking::Column::StudioId.eq(studio_id))
            .filter(booking::Column::BookingDate.eq(date))
            .filter(booking::Column::Status.ne(i32::from(BookingStatus::Cancelled)))
            .all(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Booking::from).collect())
    }

    /// Insert a new booking with status Pending.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        user_id: i32,
        studio_id: i32,
        booking_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
        total_price: Decimal,
    ) -> AppResult<Booking> {
        let now = chrono::Utc::now();
        let active_model = booking::ActiveModel {
            user_id: Set(user_id),
            studio_id: Set(studio_id),
            booking_date: Set(booking_date),
            start_time: Set(start_time),
            end_time: Set(end_time),
            status: Set(i32::from(BookingStatus::Pending)),
            total_price: Set(total_price),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = active_model
            .insert(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(Booking::from(model))
    }

    /// Delete all bookings owned by a user (account deletion only).
    pub async fn delete_for_user(&self, user_id: i32) -> AppResult<u64> {
        let result = booking::Entity::delete_many()
            .filter(booking::Column::UserId.eq(user_id))
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
