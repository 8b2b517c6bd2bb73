//! Booking domain entity and status enumeration.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Booking lifecycle status.
///
/// Serializes as its integer wire form (0/1/2), matching the
/// public API contract. New bookings always start as `Pending`;
/// callers never choose the initial status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl From<BookingStatus> for i32 {
    fn from(status: BookingStatus) -> Self {
        match status {
            BookingStatus::Pending => 0,
            BookingStatus::Confirmed => 1,
            BookingStatus::Cancelled => 2,
        }
    }
}

impl TryFrom<i32> for BookingStatus {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(BookingStatus::Pending),
            1 => Ok(BookingStatus::Confirmed),
            2 => Ok(BookingStatus::Cancelled),
            other => Err(format!("invalid booking status: {}", other)),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Booking domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub studio_id: i32,
    /// Calendar day of the booking, no time-of-day component
    pub booking_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub status: BookingStatus,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// A booking counts against the schedule unless it is cancelled.
    pub fn is_active(&self) -> bool {
        self.status != BookingStatus::Cancelled
    }
}

/// Booking response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingResponse {
    /// Unique booking identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Booked studio
    #[schema(example = 1)]
    pub studio_id: i32,
    /// Calendar date of the booking
    #[schema(value_type = String, example = "2026-02-13")]
    pub booking_date: NaiveDate,
    /// Start time-of-day (inclusive)
    #[schema(value_type = String, example = "13:00:00")]
    pub start_time: NaiveTime,
    /// End time-of-day (exclusive)
    #[schema(value_type = String, example = "14:30:00")]
    pub end_time: NaiveTime,
    /// Status: 0 = pending, 1 = confirmed, 2 = cancelled
    #[schema(value_type = i32, example = 0)]
    pub status: BookingStatus,
    /// Total price for the window
    #[schema(value_type = f64, example = 67.50)]
    pub total_price: Decimal,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id,
            studio_id: booking.studio_id,
            booking_date: booking.booking_date,
            start_time: booking.start_time,
            end_time: booking.end_time,
            status: booking.status,
            total_price: booking.total_price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_converts_to_wire_integers() {
        assert_eq!(i32::from(BookingStatus::Pending), 0);
        assert_eq!(i32::from(BookingStatus::Confirmed), 1);
        assert_eq!(i32::from(BookingStatus::Cancelled), 2);
    }

    #[test]
    fn status_rejects_out_of_range_integers() {
        assert_eq!(BookingStatus::try_from(1), Ok(BookingStatus::Confirmed));
        assert!(BookingStatus::try_from(3).is_err());
        assert!(BookingStatus::try_from(-1).is_err());
    }

    #[test]
    fn status_serializes_as_integer() {
        let json = serde_json::to_string(&BookingStatus::Confirmed).unwrap();
        assert_eq!(json, "1");
        let back: BookingStatus = serde_json::from_str("2").unwrap();
        assert_eq!(back, BookingStatus::Cancelled);
    }
}
