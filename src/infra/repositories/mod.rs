//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod booking_repository;
pub(crate) mod entities;
mod studio_repository;
mod user_repository;

pub use booking_repository::{BookingRepository, BookingStore};
pub use studio_repository::{StudioRepository, StudioStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for unit tests
#[cfg(test)]
pub use booking_repository::MockBookingRepository;
#[cfg(test)]
pub use studio_repository::MockStudioRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
