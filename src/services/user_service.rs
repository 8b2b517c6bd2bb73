//! User service - profile lookup, admin listing, account deletion.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::User;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// List all users ordered by ID (admin operation)
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Permanently delete a user and all of their bookings.
    ///
    /// The only path in the system that physically deletes bookings.
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using Unit of Work.
pub struct UserManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> UserManager<U> {
    /// Create new user service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> UserService for UserManager<U> {
    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.uow
            .users()
            .find_by_id(id)
            .await?
            .ok_or_not_found("User")
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.uow.users().list().await
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        // The user row and their bookings go together or not at all
        self.uow
            .transaction(|ctx| {
                Box::pin(async move {
                    ctx.users().find_by_id(id).await?.ok_or_not_found("User")?;

                    let removed = ctx.bookings().delete_for_user(id).await?;
                    if removed > 0 {
                        tracing::info!(user_id = id, bookings = removed, "Deleted user bookings");
                    }

                    ctx.users().delete(id).await
                })
            })
            .await
    }
}
