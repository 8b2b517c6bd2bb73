//! Service Container - Centralized service access.
//!
//! Provides a single construction point for the application's
//! services, all sharing one Unit of Work over the database
//! connection.

use std::sync::Arc;

use super::{AuthService, BookingService, StudioService, UserService};
use crate::config::Config;
use crate::infra::Persistence;

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get studio service
    fn studios(&self) -> Arc<dyn StudioService>;

    /// Get booking service
    fn bookings(&self) -> Arc<dyn BookingService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    user_service: Arc<dyn UserService>,
    studio_service: Arc<dyn StudioService>,
    booking_service: Arc<dyn BookingService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        use super::{Authenticator, BookingManager, StudioCatalog, UserManager};

        let uow = Arc::new(Persistence::new(db));
        let auth_service = Arc::new(Authenticator::new(uow.clone(), config));
        let user_service = Arc::new(UserManager::new(uow.clone()));
        let studio_service = Arc::new(StudioCatalog::new(uow.clone()));
        let booking_service = Arc::new(BookingManager::new(uow));

        Self {
            auth_service,
            user_service,
            studio_service,
            booking_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn studios(&self) -> Arc<dyn StudioService> {
        self.studio_service.clone()
    }

    fn bookings(&self) -> Arc<dyn BookingService> {
        self.booking_service.clone()
    }
}
