//! Calendar-month window helpers.
//!
//! The monthly project quota counts projects created since the first instant
//! of the current calendar month. All accounting is done in UTC.

use chrono::{DateTime, Datelike, TimeZone, Utc};

/// First instant (day 1, 00:00:00 UTC) of the calendar month containing `at`.
pub fn month_start(at: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(at.year(), at.month(), 1, 0, 0, 0)
        .single()
        .expect("first day of month is always a valid timestamp")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        s.parse().expect("valid RFC 3339 timestamp")
    }

    #[test]
    fn test_month_start_mid_month() {
        let start = month_start(ts("2025-06-17T14:32:09Z"));
        assert_eq!(start, ts("2025-06-01T00:00:00Z"));
    }

    #[test]
    fn test_month_start_is_idempotent_on_first_instant() {
        let first = ts("2025-03-01T00:00:00Z");
        assert_eq!(month_start(first), first);
    }

    #[test]
    fn test_last_second_of_previous_month_falls_outside_window() {
        // A project created at 23:59:59 on the last day of May must not
        // count toward June's quota.
        let late_may = ts("2025-05-31T23:59:59Z");
        let june_window = month_start(ts("2025-06-12T08:00:00Z"));
        assert!(late_may < june_window);
    }

    #[test]
    fn test_month_start_across_year_boundary() {
        let start = month_start(ts("2026-01-01T00:00:01Z"));
        assert_eq!(start, ts("2026-01-01T00:00:00Z"));
    }
}
