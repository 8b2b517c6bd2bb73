//! Booking conflict-detection and pricing engine.
//!
//! Pure functions over their inputs: no I/O, no logging, no clock.
//! The caller loads the studio and the day's existing bookings, and
//! persists the result; admission control lives here.
//!
//! Intervals are half-open `[start, end)`: a booking that ends at
//! 11:00 does not conflict with one that starts at 11:00.

use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::{Booking, Studio};
use crate::errors::{AppError, AppResult};

const SECONDS_PER_HOUR: i64 = 3600;

/// Half-open interval intersection test.
pub fn overlaps(
    a_start: NaiveTime,
    a_end: NaiveTime,
    b_start: NaiveTime,
    b_end: NaiveTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Price for a time window at the given hourly rate.
///
/// Fractional hours are allowed (13:00-14:30 is 1.5 hours). The
/// result is rounded to two decimals with midpoint-away-from-zero,
/// not banker's rounding.
pub fn booking_price(hourly_rate: Decimal, start: NaiveTime, end: NaiveTime) -> Decimal {
    let seconds = (end - start).num_seconds();
    let duration_hours = Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR);
    (duration_hours * hourly_rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Decide whether a new booking may be admitted and compute its price.
///
/// Precondition checks run in order, each short-circuiting with its
/// own error kind:
///
/// 1. `end > start`, else [`AppError::InvalidTimeRange`];
/// 2. no overlap with any active (non-cancelled) booking in
///    `existing`, else [`AppError::TimeConflict`].
///
/// `existing` must already be filtered to the same studio and
/// calendar date; studio existence is the caller's lookup.
pub fn evaluate_new_booking(
    studio: &Studio,
    start: NaiveTime,
    end: NaiveTime,
    existing: &[Booking],
) -> AppResult<Decimal> {
    if end <= start {
        return Err(AppError::InvalidTimeRange);
    }

    let conflict = existing
        .iter()
        .any(|b| b.is_active() && overlaps(start, end, b.start_time, b.end_time));
    if conflict {
        return Err(AppError::TimeConflict);
    }

    Ok(booking_price(studio.hourly_rate, start, end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookingStatus;
    use chrono::{NaiveDate, Utc};
    use rust_decimal_macros::dec;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn studio(rate: Decimal) -> Studio {
        Studio {
            id: 1,
            name: "Red Studio".to_string(),
            description: None,
            hourly_rate: rate,
            max_capacity: 3,
            location: None,
            created_at: Utc::now(),
        }
    }

    fn existing(start: NaiveTime, end: NaiveTime, status: BookingStatus) -> Booking {
        Booking {
            id: 7,
            user_id: 1,
            studio_id: 1,
            booking_date: NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            start_time: start,
            end_time: end,
            status,
            total_price: dec!(45.00),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn touching_endpoints_do_not_overlap() {
        assert!(!overlaps(t(10, 0), t(11, 0), t(11, 0), t(12, 0)));
        assert!(!overlaps(t(11, 0), t(12, 0), t(10, 0), t(11, 0)));
    }

    #[test]
    fn partial_overlap_conflicts_both_ways() {
        assert!(overlaps(t(10, 0), t(11, 0), t(10, 30), t(11, 30)));
        assert!(overlaps(t(10, 30), t(11, 30), t(10, 0), t(11, 0)));
    }

    #[test]
    fn containment_overlaps() {
        assert!(overlaps(t(10, 0), t(13, 0), t(11, 0), t(12, 0)));
        assert!(overlaps(t(11, 0), t(12, 0), t(10, 0), t(13, 0)));
    }

    #[test]
    fn price_for_fractional_hours() {
        // $45.00/hour for 13:00-14:30 (1.5h) is $67.50
        assert_eq!(booking_price(dec!(45.00), t(13, 0), t(14, 30)), dec!(67.50));
    }

    #[test]
    fn price_rounds_midpoints_away_from_zero() {
        // 1h at $0.125/h sits exactly on the half-cent boundary
        assert_eq!(booking_price(dec!(0.125), t(9, 0), t(10, 0)), dec!(0.13));
        // 30min at $0.25/h is the same boundary from a fraction
        assert_eq!(booking_price(dec!(0.25), t(9, 0), t(9, 30)), dec!(0.13));
    }

    #[test]
    fn rejects_inverted_or_empty_window() {
        let s = studio(dec!(45.00));
        let err = evaluate_new_booking(&s, t(11, 0), t(10, 0), &[]).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimeRange));

        let err = evaluate_new_booking(&s, t(10, 0), t(10, 0), &[]).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimeRange));
    }

    #[test]
    fn invalid_range_wins_over_conflict_check() {
        let s = studio(dec!(45.00));
        let taken = vec![existing(t(9, 0), t(12, 0), BookingStatus::Confirmed)];
        let err = evaluate_new_booking(&s, t(11, 0), t(10, 0), &taken).unwrap_err();
        assert!(matches!(err, AppError::InvalidTimeRange));
    }

    #[test]
    fn rejects_overlap_with_confirmed_booking() {
        let s = studio(dec!(45.00));
        let taken = vec![existing(t(10, 0), t(11, 0), BookingStatus::Confirmed)];
        let err = evaluate_new_booking(&s, t(10, 30), t(11, 30), &taken).unwrap_err();
        assert!(matches!(err, AppError::TimeConflict));
    }

    #[test]
    fn pending_bookings_also_block() {
        let s = studio(dec!(45.00));
        let taken = vec![existing(t(10, 0), t(11, 0), BookingStatus::Pending)];
        let err = evaluate_new_booking(&s, t(10, 30), t(11, 30), &taken).unwrap_err();
        assert!(matches!(err, AppError::TimeConflict));
    }

    #[test]
    fn cancelled_bookings_do_not_block() {
        let s = studio(dec!(45.00));
        let taken = vec![existing(t(10, 0), t(11, 0), BookingStatus::Cancelled)];
        let price = evaluate_new_booking(&s, t(10, 30), t(11, 30), &taken).unwrap();
        assert_eq!(price, dec!(45.00));
    }

    #[test]
    fn back_to_back_bookings_are_admitted() {
        let s = studio(dec!(65.00));
        let taken = vec![existing(t(11, 0), t(12, 0), BookingStatus::Confirmed)];
        let price = evaluate_new_booking(&s, t(10, 0), t(11, 0), &taken).unwrap();
        assert_eq!(price, dec!(65.00));
    }
}
