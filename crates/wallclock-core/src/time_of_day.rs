//! # Time of Day
//!
//! `TimeOfDay` is a wall-clock reading (hour and minute) with no date and no
//! timezone. It is an immutable value: equality, hashing and ordering are
//! defined by the two fields alone, hour first.
//!
//! ## Ordering
//!
//! Times of day are ordered linearly from `0:0` to `23:59`. There is no
//! wraparound at midnight: `23:59` is after `0:0`, whatever "next day"
//! reading a caller may have in mind. Elapsed-time arithmetic across the
//! day boundary needs a date, i.e. a [`CalendarMinute`].
//!
//! ## Derivation
//!
//! A time of day becomes a [`CalendarMinute`] once bound to a
//! [`CalendarDate`] ([`TimeOfDay::on`]), and an absolute [`TimePoint`] once
//! that calendar minute is read in a [`Timezone`]
//! ([`TimeOfDay::as_time_point_given`]). Both steps delegate to
//! `CalendarMinute`; nothing here knows about offsets.

use chrono::{NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::calendar_minute::CalendarMinute;
use crate::clock::{HourOfDay, MinuteOfHour};
use crate::date::CalendarDate;
use crate::error::WallclockError;
use crate::temporal::TimePoint;
use crate::zone::Timezone;

/// An hour and minute on a 24-hour clock.
///
/// Field order matters: the derived `Ord` compares `hour` before `minute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: HourOfDay,
    minute: MinuteOfHour,
}

impl TimeOfDay {
    /// Midnight, `0:0`.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay {
        hour: HourOfDay::MIDNIGHT,
        minute: MinuteOfHour::ON_THE_HOUR,
    };

    /// Combine an already-validated hour and minute. Cannot fail.
    pub fn new(hour: HourOfDay, minute: MinuteOfHour) -> Self {
        Self { hour, minute }
    }

    /// Construct from raw integers.
    ///
    /// Range checks live in [`HourOfDay::new`] and [`MinuteOfHour::new`];
    /// the hour is checked first.
    ///
    /// # Errors
    ///
    /// Returns [`WallclockError::InvalidArgument`] if `hour` is outside
    /// `[0, 23]` or `minute` is outside `[0, 59]`.
    pub fn from_hm(hour: i32, minute: i32) -> Result<Self, WallclockError> {
        Ok(Self::new(HourOfDay::new(hour)?, MinuteOfHour::new(minute)?))
    }

    /// The hour component.
    ///
    /// This hands out the internal representation. It is a copy, so the
    /// time of day itself stays immutable.
    pub fn hour(&self) -> HourOfDay {
        self.hour
    }

    /// The minute component. See [`TimeOfDay::hour`].
    pub fn minute(&self) -> MinuteOfHour {
        self.minute
    }

    /// True iff `self` is strictly later in the day than `other`.
    pub fn is_after(&self, other: &TimeOfDay) -> bool {
        self.hour.is_after(other.hour)
            || (self.hour == other.hour && self.minute.is_after(other.minute))
    }

    /// True iff `self` is strictly earlier in the day than `other`.
    pub fn is_before(&self, other: &TimeOfDay) -> bool {
        self.hour.is_before(other.hour)
            || (self.hour == other.hour && self.minute.is_before(other.minute))
    }

    /// Bind this time of day to `date`.
    pub fn on(&self, date: CalendarDate) -> CalendarMinute {
        CalendarMinute::new(date, *self)
    }

    /// Resolve this time of day on `date`, read in `zone`, to an absolute
    /// instant. Equivalent to `self.on(date).as_time_point(zone)`.
    ///
    /// # Errors
    ///
    /// Propagates [`CalendarMinute::as_time_point`] failures, which only
    /// occur at the extreme ends of the representable date range.
    pub fn as_time_point_given(
        &self,
        date: CalendarDate,
        zone: Timezone,
    ) -> Result<TimePoint, WallclockError> {
        self.on(date).as_time_point(zone)
    }

    /// Minutes elapsed since midnight, in `[0, 1439]`.
    pub fn minute_of_day(&self) -> u16 {
        u16::from(self.hour.value()) * 60 + u16::from(self.minute.value())
    }

    /// The equivalent `chrono::NaiveTime` (zero seconds).
    pub fn to_naive_time(&self) -> NaiveTime {
        NaiveTime::default() + TimeDelta::minutes(self.minute_of_day().into())
    }
}

/// Drops seconds and sub-seconds.
impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self::new(
            HourOfDay::from_chrono(time.hour()),
            MinuteOfHour::from_chrono(time.minute()),
        )
    }
}

/// Diagnostic rendering, `<hour>:<minute>`, each part unpadded.
///
/// `9:30`, `0:5`. Not intended to be parsed back.
impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}
