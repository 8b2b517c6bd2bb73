//! Booking handlers.
//!
//! The HTTP layer performs no permission checks beyond requiring
//! authentication; the access policy in the booking service is the
//! single decision point for status transitions. That makes the
//! owner-cancel path of the transition table reachable through
//! `PUT /api/bookings/{id}` as well as the DELETE shorthand.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::BookingResponse;
use crate::errors::AppResult;
use crate::services::CreateBookingData;
use crate::types::{ApiResponse, Created, NoContent};

/// Booking creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBookingRequest {
    /// Studio to book
    #[schema(example = 1)]
    pub studio_id: i32,
    /// Calendar date; a datetime is accepted and truncated to its day
    #[serde(deserialize_with = "deserialize_booking_date")]
    #[schema(value_type = String, example = "2026-02-13")]
    pub booking_date: NaiveDate,
    /// Start time-of-day (inclusive)
    #[schema(value_type = String, example = "13:00:00")]
    pub start_time: NaiveTime,
    /// End time-of-day (exclusive)
    #[schema(value_type = String, example = "14:30:00")]
    pub end_time: NaiveTime,
}

/// Booking status update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBookingStatusRequest {
    /// Requested status: 1 = confirmed, 2 = cancelled
    #[schema(example = 1)]
    pub status: i32,
}

/// Accept `2026-02-13` or a datetime whose time-of-day is discarded.
fn deserialize_booking_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    if let Ok(date) = NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    Err(de::Error::custom(format!(
        "invalid booking date: {:?}",
        raw
    )))
}

/// Create booking routes (all require authentication)
pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_bookings).post(create_booking))
        .route(
            "/:id",
            get(get_booking)
                .put(update_booking_status)
                .delete(cancel_booking),
        )
}

/// List the authenticated user's bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The actor's bookings, most recent first", body = [BookingResponse]),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
) -> AppResult<Json<ApiResponse<Vec<BookingResponse>>>> {
    let bookings = state.booking_service.list_for_user(current_user.id).await?;
    let responses = bookings.into_iter().map(BookingResponse::from).collect();
    Ok(Json(ApiResponse::success(responses)))
}

/// Get a single booking
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking", body = BookingResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Booking not found or not visible")
    )
)]
pub async fn get_booking(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state
        .booking_service
        .get_for_actor(current_user.id, current_user.role, id)
        .await?;
    Ok(Json(ApiResponse::success(BookingResponse::from(booking))))
}

/// Create a new booking
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created with status pending", body = BookingResponse),
        (status = 400, description = "Invalid time range or time conflict"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Studio not found")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateBookingRequest>,
) -> AppResult<Created<BookingResponse>> {
    let booking = state
        .booking_service
        .create(
            current_user.id,
            CreateBookingData {
                studio_id: payload.studio_id,
                booking_date: payload.booking_date,
                start_time: payload.start_time,
                end_time: payload.end_time,
            },
        )
        .await?;

    Ok(Created(BookingResponse::from(booking)))
}

/// Request a booking status transition
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusRequest,
    responses(
        (status = 200, description = "Booking updated", body = BookingResponse),
        (status = 400, description = "Status value out of range"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Transition not permitted for this actor"),
        (status = 404, description = "Booking or actor not found")
    )
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateBookingStatusRequest>,
) -> AppResult<Json<ApiResponse<BookingResponse>>> {
    let booking = state
        .booking_service
        .update_status(current_user.id, id, payload.status)
        .await?;
    Ok(Json(ApiResponse::success(BookingResponse::from(booking))))
}

/// Cancel a booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = "Bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 204, description = "Booking cancelled"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Cancellation not permitted for this actor"),
        (status = 404, description = "Booking or actor not found")
    )
)]
pub async fn cancel_booking(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.booking_service.cancel(current_user.id, id).await?;
    Ok(NoContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct DateOnly {
        #[serde(deserialize_with = "deserialize_booking_date")]
        booking_date: NaiveDate,
    }

    #[test]
    fn plain_date_is_accepted() {
        let parsed: DateOnly = serde_json::from_str(r#"{"booking_date":"2026-02-13"}"#).unwrap();
        assert_eq!(
            parsed.booking_date,
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
        );
    }

    #[test]
    fn datetime_is_truncated_to_its_day() {
        let parsed: DateOnly =
            serde_json::from_str(r#"{"booking_date":"2026-02-13T18:45:00Z"}"#).unwrap();
        assert_eq!(
            parsed.booking_date,
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
        );

        let parsed: DateOnly =
            serde_json::from_str(r#"{"booking_date":"2026-02-13T18:45:00"}"#).unwrap();
        assert_eq!(
            parsed.booking_date,
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap()
        );
    }

    #[test]
    fn garbage_date_is_rejected() {
        let result: Result<DateOnly, _> = serde_json::from_str(r#"{"booking_date":"tomorrow"}"#);
        assert!(result.is_err());
    }
}
