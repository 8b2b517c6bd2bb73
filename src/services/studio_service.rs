//! Studio service - public catalog lookups.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::Studio;
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Studio service trait for dependency injection.
#[async_trait]
pub trait StudioService: Send + Sync {
    /// Get studio by ID
    async fn get_studio(&self, id: i32) -> AppResult<Studio>;

    /// List all studios ordered by ID
    async fn list_studios(&self) -> AppResult<Vec<Studio>>;
}

/// Concrete implementation of StudioService using Unit of Work.
pub struct StudioCatalog<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> StudioCatalog<U> {
    /// Create new studio service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> StudioService for StudioCatalog<U> {
    async fn get_studio(&self, id: i32) -> AppResult<Studio> {
        self.uow
            .studios()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Studio")
    }

    async fn list_studios(&self) -> AppResult<Vec<Studio>> {
        self.uow.studios().list().await
    }
}
