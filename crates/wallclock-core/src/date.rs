//! # Calendar Dates
//!
//! `CalendarDate` is a day on the proleptic Gregorian calendar with no time
//! and no timezone attached. It is a validated wrapper over
//! `chrono::NaiveDate`; impossible dates such as February 30th are rejected
//! at construction.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::WallclockError;

/// A calendar date without a time of day or timezone.
///
/// Serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Construct a date from year, month (1-12) and day of month (1-31).
    ///
    /// # Errors
    ///
    /// Returns [`WallclockError::InvalidArgument`] if the triple does not
    /// name a real day (month 13, day 0, February 29th of a common year)
    /// or falls outside the range chrono can represent.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, WallclockError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                WallclockError::InvalidArgument(format!(
                    "no such calendar date: {year:04}-{month:02}-{day:02}"
                ))
            })
    }

    /// Wrap an existing `chrono::NaiveDate`.
    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Access the inner `NaiveDate`.
    pub fn as_naive_date(&self) -> &NaiveDate {
        &self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_ymd_valid() {
        let date = CalendarDate::from_ymd(2026, 1, 15).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 1, 15));
    }

    #[test]
    fn test_leap_day() {
        assert!(CalendarDate::from_ymd(2024, 2, 29).is_ok());
        assert!(CalendarDate::from_ymd(2026, 2, 29).is_err());
    }

    #[test]
    fn test_impossible_dates_rejected() {
        assert!(CalendarDate::from_ymd(2026, 13, 1).is_err());
        assert!(CalendarDate::from_ymd(2026, 0, 1).is_err());
        assert!(CalendarDate::from_ymd(2026, 4, 31).is_err());
        assert!(CalendarDate::from_ymd(2026, 1, 0).is_err());
    }

    #[test]
    fn test_display_iso() {
        let date = CalendarDate::from_ymd(2026, 3, 7).unwrap();
        assert_eq!(date.to_string(), "2026-03-07");
    }

    #[test]
    fn test_ordering() {
        let a = CalendarDate::from_ymd(2025, 12, 31).unwrap();
        let b = CalendarDate::from_ymd(2026, 1, 1).unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_serde_roundtrip() {
        let date = CalendarDate::from_ymd(2026, 1, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2026-01-15\"");
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, date);
    }
}
