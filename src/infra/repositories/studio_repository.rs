//! Studio repository implementation.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use super::entities::studio::{self, Entity as StudioEntity};
use crate::domain::Studio;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// Studio repository trait for dependency injection.
///
/// The catalog is read-only from the application's point of view;
/// rows come from migrations and the seed command.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait StudioRepository: Send + Sync {
    /// Find studio by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Studio>>;

    /// List all studios ordered by ID
    async fn list(&self) -> AppResult<Vec<Studio>>;
}

/// Concrete implementation of StudioRepository
pub struct StudioStore {
    db: DatabaseConnection,
}

impl StudioStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StudioRepository for StudioStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Studio>> {
        let result = StudioEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Studio::from))
    }

    async fn list(&self) -> AppResult<Vec<Studio>> {
        let models = StudioEntity::find()
            .order_by_asc(studio::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Studio::from).collect())
    }
}
