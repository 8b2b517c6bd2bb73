//! HTTP request handlers.

pub mod auth_handler;
pub mod booking_handler;
pub mod studio_handler;
pub mod user_handler;

pub use auth_handler::auth_routes;
pub use booking_handler::booking_routes;
pub use studio_handler::studio_routes;
pub use user_handler::user_routes;
