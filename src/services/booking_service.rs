//! Booking service - booking lifecycle orchestration.
//!
//! Wires the pure admission engine (`domain::schedule`) and the
//! access policy (`domain::policy`) to persistence. Creation runs
//! the overlap check and the insert inside one serializable
//! transaction, so two concurrent requests for the same studio and
//! date cannot both pass the check. Status changes re-load the
//! actor from the identity store for the policy decision instead of
//! trusting token claims.

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;

use crate::domain::{policy, schedule, Booking, BookingStatus, UserRole};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Data accepted by booking creation after boundary validation.
///
/// `booking_date` is already truncated to a calendar day; any
/// time-of-day sent by the client was discarded at the boundary.
#[derive(Debug, Clone, Copy)]
pub struct CreateBookingData {
    pub studio_id: i32,
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Booking service trait for dependency injection.
#[async_trait]
pub trait BookingService: Send + Sync {
    /// List the actor's own bookings, most recent first
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Booking>>;

    /// Get a single booking.
    ///
    /// Owners see their own bookings; Manager/Admin see any. A
    /// foreign booking looks like it does not exist to a plain user
    /// (404, not 403).
    async fn get_for_actor(
        &self,
        actor_id: i32,
        actor_role: UserRole,
        booking_id: i32,
    ) -> AppResult<Booking>;

    /// Create a new booking with status Pending
    async fn create(&self, actor_id: i32, data: CreateBookingData) -> AppResult<Booking>;

    /// Apply a requested status transition (1 = confirm, 2 = cancel)
    async fn update_status(
        &self,
        actor_id: i32,
        booking_id: i32,
        requested_status: i32,
    ) -> AppResult<Booking>;

    /// Cancel a booking (shorthand for the Cancelled transition)
    async fn cancel(&self, actor_id: i32, booking_id: i32) -> AppResult<Booking>;
}

/// Concrete implementation of BookingService using Unit of Work.
pub struct BookingManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> BookingManager<U> {
    /// Create new booking service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Load booking and actor in the order the API contract fixes:
    /// a missing booking surfaces before a missing actor.
    async fn load_booking_and_actor(
        &self,
        booking_id: i32,
        actor_id: i32,
    ) -> AppResult<(Booking, UserRole)> {
        let booking = self
            .uow
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or_not_found("Booking")?;

        let actor = self
            .uow
            .users()
            .find_by_id(actor_id)
            .await?
            .ok_or_not_found("User")?;

        Ok((booking, actor.role))
    }
}

#[async_trait]
impl<U: UnitOfWork> BookingService for BookingManager<U> {
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Booking>> {
        self.uow.bookings().list_for_user(user_id).await
    }

    async fn get_for_actor(
        &self,
        actor_id: i32,
        actor_role: UserRole,
        booking_id: i32,
    ) -> AppResult<Booking> {
        let booking = self
            .uow
            .bookings()
            .find_by_id(booking_id)
            .await?
            .ok_or_not_found("Booking")?;

        if booking.user_id != actor_id && !actor_role.is_elevated() {
            return Err(AppError::NotFound("Booking"));
        }

        Ok(booking)
    }

    async fn create(&self, actor_id: i32, data: CreateBookingData) -> AppResult<Booking> {
        self.uow
            .transaction_serializable(move |ctx| {
                Box::pin(async move {
                    let studio = ctx
                        .studios()
                        .find_by_id(data.studio_id)
                        .await?
                        .ok_or_not_found("Studio")?;

                    let existing = ctx
                        .bookings()
                        .find_active_for_studio_date(data.studio_id, data.booking_date)
                        .await?;

                    let price = schedule::evaluate_new_booking(
                        &studio,
                        data.start_time,
                        data.end_time,
                        &existing,
                    )?;

                    ctx.bookings()
                        .create(
                            actor_id,
                            data.studio_id,
                            data.booking_date,
                            data.start_time,
                            data.end_time,
                            price,
                        )
                        .await
                })
            })
            .await
    }

    async fn update_status(
        &self,
        actor_id: i32,
        booking_id: i32,
        requested_status: i32,
    ) -> AppResult<Booking> {
        let (booking, actor_role) = self.load_booking_and_actor(booking_id, actor_id).await?;

        let requested = BookingStatus::try_from(requested_status)
            .map_err(|_| AppError::InvalidStatus(requested_status))?;

        let is_owner = booking.user_id == actor_id;
        if !policy::can_transition(actor_role, is_owner, requested) {
            return Err(AppError::Forbidden);
        }

        self.uow.bookings().set_status(booking_id, requested).await
    }

    async fn cancel(&self, actor_id: i32, booking_id: i32) -> AppResult<Booking> {
        let (booking, actor_role) = self.load_booking_and_actor(booking_id, actor_id).await?;

        let is_owner = booking.user_id == actor_id;
        if !policy::can_cancel(actor_role, is_owner) {
            return Err(AppError::Forbidden);
        }

        // No terminal-state guard: cancelling an already-cancelled
        // booking succeeds again and re-stamps updated_at
        self.uow
            .bookings()
            .set_status(booking_id, BookingStatus::Cancelled)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{
        MockBookingRepository, MockStudioRepository, MockUserRepository,
    };
    use crate::infra::{
        BookingRepository, StudioRepository, TransactionContext, UserRepository,
    };
    use chrono::Utc;
    use mockall::predicate::eq;
    use rust_decimal_macros::dec;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn booking(id: i32, user_id: i32, status: BookingStatus) -> Booking {
        Booking {
            id,
            user_id,
            studio_id: 1,
            booking_date: NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            start_time: t(10, 0),
            end_time: t(11, 0),
            status,
            total_price: dec!(45.00),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn user(id: i32, role: UserRole) -> crate::domain::User {
        crate::domain::User {
            id,
            email: format!("user{}@example.com", id),
            password_hash: "hashed".to_string(),
            first_name: None,
            last_name: None,
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    /// Test double for UnitOfWork wrapping mock repositories.
    /// Transactions are not supported; creation goes through the
    /// pure engine tests in `domain::schedule` instead.
    struct TestUnitOfWork {
        users: Arc<MockUserRepository>,
        studios: Arc<MockStudioRepository>,
        bookings: Arc<MockBookingRepository>,
    }

    impl TestUnitOfWork {
        fn new(
            users: MockUserRepository,
            bookings: MockBookingRepository,
        ) -> Self {
            Self {
                users: Arc::new(users),
                studios: Arc::new(MockStudioRepository::new()),
                bookings: Arc::new(bookings),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn studios(&self) -> Arc<dyn StudioRepository> {
            self.studios.clone()
        }

        fn bookings(&self) -> Arc<dyn BookingRepository> {
            self.bookings.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }

        async fn transaction_serializable<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                    Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
                > + Send,
            T: Send,
        {
            Err(AppError::internal("Transactions not supported in test mock"))
        }
    }

    fn manager_with(
        users: MockUserRepository,
        bookings: MockBookingRepository,
    ) -> BookingManager<TestUnitOfWork> {
        BookingManager::new(Arc::new(TestUnitOfWork::new(users, bookings)))
    }

    #[tokio::test]
    async fn missing_booking_surfaces_before_missing_actor() {
        let users = MockUserRepository::new(); // must never be consulted
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .with(eq(99))
            .returning(|_| Ok(None));

        let svc = manager_with(users, bookings);
        let err = svc.update_status(1, 99, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("Booking")));
    }

    #[tokio::test]
    async fn missing_actor_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_id().returning(|_| Ok(None));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 1, BookingStatus::Pending))));

        let svc = manager_with(users, bookings);
        let err = svc.update_status(42, 5, 1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("User")));
    }

    #[tokio::test]
    async fn out_of_range_status_is_rejected_after_lookups() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::Admin))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 1, BookingStatus::Pending))));

        let svc = manager_with(users, bookings);
        let err = svc.update_status(1, 5, 3).await.unwrap_err();
        assert!(matches!(err, AppError::InvalidStatus(3)));
    }

    #[tokio::test]
    async fn requesting_pending_is_forbidden_even_for_admin() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::Admin))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 1, BookingStatus::Confirmed))));

        let svc = manager_with(users, bookings);
        // Status 0 is in range but permitted for no one
        let err = svc.update_status(1, 5, 0).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn plain_user_cannot_confirm_own_booking() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::User))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Pending))));

        let svc = manager_with(users, bookings);
        let err = svc.update_status(7, 5, 1).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn manager_confirms_foreign_pending_booking() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::Manager))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Pending))));
        bookings
            .expect_set_status()
            .with(eq(5), eq(BookingStatus::Confirmed))
            .returning(|id, status| Ok(booking(id, 7, status)));

        let svc = manager_with(users, bookings);
        let updated = svc.update_status(99, 5, 1).await.unwrap();
        assert_eq!(updated.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn owner_cancels_via_status_update() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::User))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Pending))));
        bookings
            .expect_set_status()
            .with(eq(5), eq(BookingStatus::Cancelled))
            .returning(|id, status| Ok(booking(id, 7, status)));

        let svc = manager_with(users, bookings);
        let updated = svc.update_status(7, 5, 2).await.unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn plain_user_cannot_cancel_foreign_booking() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::User))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Pending))));

        let svc = manager_with(users, bookings);
        let err = svc.cancel(8, 5).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden));
    }

    #[tokio::test]
    async fn admin_cancels_foreign_booking() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::Admin))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Confirmed))));
        bookings
            .expect_set_status()
            .returning(|id, status| Ok(booking(id, 7, status)));

        let svc = manager_with(users, bookings);
        let updated = svc.cancel(99, 5).await.unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn cancel_is_repeatable_and_restamps() {
        // Documents the upstream gap: no terminal-state guard, so a
        // second cancel succeeds and bumps updated_at again.
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::User))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Cancelled))));
        bookings
            .expect_set_status()
            .with(eq(5), eq(BookingStatus::Cancelled))
            .times(1)
            .returning(|id, status| {
                let mut b = booking(id, 7, status);
                b.updated_at = Utc::now();
                Ok(b)
            });

        let svc = manager_with(users, bookings);
        let updated = svc.cancel(7, 5).await.unwrap();
        assert_eq!(updated.status, BookingStatus::Cancelled);
    }

    #[tokio::test]
    async fn confirm_after_cancel_currently_allowed() {
        // Same gap from the other side: the policy does not consult
        // the current status, so a manager may confirm a cancelled
        // booking.
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_id()
            .returning(|id| Ok(Some(user(id, UserRole::Manager))));
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Cancelled))));
        bookings
            .expect_set_status()
            .with(eq(5), eq(BookingStatus::Confirmed))
            .returning(|id, status| Ok(booking(id, 7, status)));

        let svc = manager_with(users, bookings);
        let updated = svc.update_status(99, 5, 1).await.unwrap();
        assert_eq!(updated.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn owner_sees_own_booking() {
        let users = MockUserRepository::new();
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Pending))));

        let svc = manager_with(users, bookings);
        let found = svc.get_for_actor(7, UserRole::User, 5).await.unwrap();
        assert_eq!(found.id, 5);
    }

    #[tokio::test]
    async fn foreign_booking_hidden_from_plain_user_but_not_manager() {
        let users = MockUserRepository::new();
        let mut bookings = MockBookingRepository::new();
        bookings
            .expect_find_by_id()
            .returning(|id| Ok(Some(booking(id, 7, BookingStatus::Pending))));

        let svc = manager_with(users, bookings);
        let err = svc.get_for_actor(8, UserRole::User, 5).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound("Booking")));

        let found = svc.get_for_actor(8, UserRole::Manager, 5).await.unwrap();
        assert_eq!(found.user_id, 7);
    }

    #[tokio::test]
    async fn list_passes_through_repository_order() {
        let users = MockUserRepository::new();
        let mut bookings = MockBookingRepository::new();
        bookings.expect_list_for_user().with(eq(7)).returning(|_| {
            Ok(vec![
                booking(2, 7, BookingStatus::Confirmed),
                booking(1, 7, BookingStatus::Cancelled),
            ])
        });

        let svc = manager_with(users, bookings);
        let list = svc.list_for_user(7).await.unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 2);
    }
}
