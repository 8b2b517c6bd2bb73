//! Domain layer - Core business entities and logic
//!
//! Contains the entities, value objects, and the two domain services
//! that carry the system's real policy: the booking conflict/pricing
//! engine (`schedule`) and the status-transition access policy
//! (`policy`). No infrastructure concerns live here.

pub mod booking;
pub mod password;
pub mod policy;
pub mod schedule;
pub mod studio;
pub mod user;

pub use booking::{Booking, BookingResponse, BookingStatus};
pub use password::Password;
pub use studio::{Studio, StudioResponse};
pub use user::{User, UserResponse, UserRole};
