//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::infra::Database;
use crate::services::{AuthService, BookingService, Services, StudioService, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Studio catalog service
    pub studio_service: Arc<dyn StudioService>,
    /// Booking service
    pub booking_service: Arc<dyn BookingService>,
    /// Database connection (health checks)
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: crate::config::Config) -> Self {
        use crate::services::ServiceContainer;

        let container = Services::from_connection(database.connection().clone(), config);

        Self {
            auth_service: container.auth(),
            user_service: container.users(),
            studio_service: container.studios(),
            booking_service: container.bookings(),
            database,
        }
    }

    /// Create application state with manually injected services (tests).
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        user_service: Arc<dyn UserService>,
        studio_service: Arc<dyn StudioService>,
        booking_service: Arc<dyn BookingService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            auth_service,
            user_service,
            studio_service,
            booking_service,
            database,
        }
    }
}
