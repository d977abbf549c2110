//! # Calendar Minutes
//!
//! A `CalendarMinute` is a [`CalendarDate`] paired with a [`TimeOfDay`]: a
//! local wall-clock reading that still lacks a timezone. Reading it in a
//! [`Timezone`] yields an absolute [`TimePoint`].

use chrono::{NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::date::CalendarDate;
use crate::error::WallclockError;
use crate::temporal::TimePoint;
use crate::time_of_day::TimeOfDay;
use crate::zone::Timezone;

/// A date plus a time of day, with no timezone.
///
/// Ordered by date, then by time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CalendarMinute {
    date: CalendarDate,
    time: TimeOfDay,
}

impl CalendarMinute {
    pub fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn time_of_day(&self) -> TimeOfDay {
        self.time
    }

    /// The local reading as a `chrono::NaiveDateTime` (zero seconds).
    pub fn to_naive_datetime(&self) -> NaiveDateTime {
        self.date.as_naive_date().and_time(self.time.to_naive_time())
    }

    /// Resolve this local reading to an absolute instant in `zone`.
    ///
    /// With a fixed offset every local minute names exactly one instant, so
    /// this only fails when the shifted instant falls outside the range
    /// chrono can represent.
    pub fn as_time_point(&self, zone: Timezone) -> Result<TimePoint, WallclockError> {
        let local = self.to_naive_datetime();
        let resolved = zone
            .as_fixed_offset()
            .from_local_datetime(&local)
            .single();

        match resolved {
            Some(dt) => Ok(TimePoint::from_utc(dt.with_timezone(&Utc))),
            None => {
                tracing::debug!(minute = %self, %zone, "local minute has no representable instant");
                Err(WallclockError::InvalidArgument(format!(
                    "{self} at UTC offset {zone} is outside the representable range"
                )))
            }
        }
    }
}

impl std::fmt::Display for CalendarMinute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
