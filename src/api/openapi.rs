//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{auth_handler, booking_handler, studio_handler, user_handler};
use crate::domain::{BookingResponse, StudioResponse, UserResponse, UserRole};
use crate::services::TokenResponse;

/// OpenAPI documentation for the StudioFlow API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "StudioFlow API",
        version = "0.1.0",
        description = "Studio rental booking API with Axum, SeaORM, and clean architecture",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
        (url = "https://api.example.com", description = "Production server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::register,
        auth_handler::login,
        // User endpoints
        user_handler::get_profile,
        user_handler::list_users,
        user_handler::delete_user,
        // Studio endpoints
        studio_handler::list_studios,
        studio_handler::get_studio,
        // Booking endpoints
        booking_handler::list_bookings,
        booking_handler::get_booking,
        booking_handler::create_booking,
        booking_handler::update_booking_status,
        booking_handler::cancel_booking,
    ),
    components(
        schemas(
            // Domain types
            UserRole,
            UserResponse,
            StudioResponse,
            BookingResponse,
            // Auth types
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            TokenResponse,
            // Booking handler types
            booking_handler::CreateBookingRequest,
            booking_handler::UpdateBookingStatusRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "User registration and login"),
        (name = "Users", description = "User profile and administration"),
        (name = "Studios", description = "Studio catalog"),
        (name = "Bookings", description = "Booking creation and lifecycle management")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /api/auth/login"))
                        .build(),
                ),
            );
        }
    }
}
