//! # Time Points — Absolute UTC Instants
//!
//! Defines `TimePoint`, an absolute instant stored in UTC and truncated to
//! seconds precision. A `TimePoint` is what a [`CalendarMinute`] becomes
//! once it is read in a [`Timezone`]; [`TimePoint::in_zone`] goes the other
//! way.
//!
//! The ISO 8601 rendering is always `YYYY-MM-DDTHH:MM:SSZ`: no sub-seconds,
//! no `+00:00`, always `Z`.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::calendar_minute::CalendarMinute;
use crate::date::CalendarDate;
use crate::error::WallclockError;
use crate::time_of_day::TimeOfDay;
use crate::zone::Timezone;

/// An absolute instant in UTC, truncated to seconds precision.
///
/// # Construction
///
/// - [`TimePoint::from_utc()`] — from a `DateTime<Utc>`, truncating sub-seconds.
/// - [`TimePoint::from_epoch_secs()`] — from Unix epoch seconds.
/// - [`CalendarMinute::as_time_point()`] — from a local reading and a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimePoint(DateTime<Utc>);

impl TimePoint {
    /// Create a time point from a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Create a time point from a Unix epoch timestamp (seconds).
    pub fn from_epoch_secs(secs: i64) -> Result<Self, WallclockError> {
        let dt = DateTime::from_timestamp(secs, 0).ok_or_else(|| {
            WallclockError::InvalidArgument(format!("Unix timestamp out of range: {secs}"))
        })?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Returns the Unix epoch timestamp in seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// The local calendar minute of this instant in `zone`.
    ///
    /// Seconds are dropped, so this is the inverse of
    /// [`CalendarMinute::as_time_point`] only for whole-minute instants.
    ///
    /// # Errors
    ///
    /// Returns [`WallclockError::InvalidArgument`] if the local reading
    /// falls outside the range chrono can represent, which only happens
    /// within a day of either end of that range.
    pub fn in_zone(&self, zone: Timezone) -> Result<CalendarMinute, WallclockError> {
        let Some(local) = self.0.naive_utc().checked_add_offset(*zone.as_fixed_offset()) else {
            tracing::debug!(time_point = %self, %zone, "instant has no representable local minute");
            return Err(WallclockError::InvalidArgument(format!(
                "{self} at UTC offset {zone} is outside the representable range"
            )));
        };
        Ok(CalendarMinute::new(
            CalendarDate::from_naive(local.date()),
            TimeOfDay::from(local.time()),
        ))
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for TimePoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

/// Truncate a `DateTime<Utc>` to seconds precision (discard nanoseconds).
fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
