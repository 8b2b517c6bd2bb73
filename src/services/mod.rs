//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion, and all share the Unit of Work for
//! repository access and transaction management.

mod auth_service;
mod booking_service;
pub mod container;
mod studio_service;
mod user_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{AuthService, Authenticator, Claims, RegisterData, TokenResponse};
pub use booking_service::{BookingManager, BookingService, CreateBookingData};
pub use studio_service::{StudioCatalog, StudioService};
pub use user_service::{UserManager, UserService};
