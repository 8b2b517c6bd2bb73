//! Shared types - Response wrappers used across handlers.

mod response;

pub use response::{ApiResponse, Created, NoContent};
