//! # Clock Components — Hour and Minute Newtypes
//!
//! `HourOfDay` and `MinuteOfHour` are the range-validated building blocks of
//! [`TimeOfDay`](crate::TimeOfDay). Each wraps a `u8` that is checked once,
//! at construction, and never again: a value of either type is valid by
//! construction, so nothing downstream re-checks the range.
//!
//! Deserialization goes through the same validating constructor, so an
//! out-of-range value in serialized input is rejected rather than smuggled
//! past the check.

use serde::{Deserialize, Serialize};

use crate::error::WallclockError;

/// An hour of the day on a 24-hour clock, in `[0, 23]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct HourOfDay(u8);

/// A minute of the hour, in `[0, 59]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct MinuteOfHour(u8);

impl HourOfDay {
    /// Smallest valid hour.
    pub const MIN: u8 = 0;
    /// Largest valid hour.
    pub const MAX: u8 = 23;
    /// Hour zero.
    pub const MIDNIGHT: HourOfDay = HourOfDay(0);

    /// Construct an hour, rejecting anything outside `[0, 23]`.
    pub fn new(value: i32) -> Result<Self, WallclockError> {
        if !(Self::MIN as i32..=Self::MAX as i32).contains(&value) {
            return Err(WallclockError::out_of_range(
                "hour of day",
                value.into(),
                Self::MIN.into(),
                Self::MAX.into(),
            ));
        }
        Ok(Self(value as u8))
    }

    /// From a chrono hour, which is always below 24.
    pub(crate) fn from_chrono(hour: u32) -> Self {
        debug_assert!(hour <= u32::from(Self::MAX));
        Self(hour as u8)
    }

    /// The hour as a plain integer.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True iff this hour is strictly later than `other`.
    pub fn is_after(self, other: Self) -> bool {
        self.0 > other.0
    }

    /// True iff this hour is strictly earlier than `other`.
    pub fn is_before(self, other: Self) -> bool {
        self.0 < other.0
    }
}

impl MinuteOfHour {
    /// Smallest valid minute.
    pub const MIN: u8 = 0;
    /// Largest valid minute.
    pub const MAX: u8 = 59;
    /// Minute zero.
    pub const ON_THE_HOUR: MinuteOfHour = MinuteOfHour(0);

    /// Construct a minute, rejecting anything outside `[0, 59]`.
    pub fn new(value: i32) -> Result<Self, WallclockError> {
        if !(Self::MIN as i32..=Self::MAX as i32).contains(&value) {
            return Err(WallclockError::out_of_range(
                "minute of hour",
                value.into(),
                Self::MIN.into(),
                Self::MAX.into(),
            ));
        }
        Ok(Self(value as u8))
    }

    /// From a chrono minute, which is always below 60.
    pub(crate) fn from_chrono(minute: u32) -> Self {
        debug_assert!(minute <= u32::from(Self::MAX));
        Self(minute as u8)
    }

    /// The minute as a plain integer.
    pub fn value(self) -> u8 {
        self.0
    }

    /// True iff this minute is strictly later than `other`.
    pub fn is_after(self, other: Self) -> bool {
        self.0 > other.0
    }

    /// True iff this minute is strictly earlier than `other`.
    pub fn is_before(self, other: Self) -> bool {
        self.0 < other.0
    }
}

impl TryFrom<i32> for HourOfDay {
    type Error = WallclockError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for MinuteOfHour {
    type Error = WallclockError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<HourOfDay> for i32 {
    fn from(hour: HourOfDay) -> Self {
        hour.0.into()
    }
}

impl From<MinuteOfHour> for i32 {
    fn from(minute: MinuteOfHour) -> Self {
        minute.0.into()
    }
}

impl std::fmt::Display for HourOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for MinuteOfHour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_bounds_accepted() {
        assert_eq!(HourOfDay::new(0).unwrap().value(), 0);
        assert_eq!(HourOfDay::new(23).unwrap().value(), 23);
    }

    #[test]
    fn test_hour_out_of_range_rejected() {
        assert!(HourOfDay::new(24).is_err());
        assert!(HourOfDay::new(-1).is_err());
        assert!(HourOfDay::new(i32::MAX).is_err());
        assert!(HourOfDay::new(i32::MIN).is_err());
    }

    #[test]
    fn test_minute_bounds_accepted() {
        assert_eq!(MinuteOfHour::new(0).unwrap().value(), 0);
        assert_eq!(MinuteOfHour::new(59).unwrap().value(), 59);
    }

    #[test]
    fn test_minute_out_of_range_rejected() {
        assert!(MinuteOfHour::new(60).is_err());
        assert!(MinuteOfHour::new(-1).is_err());
    }

    #[test]
    fn test_range_error_is_invalid_argument() {
        let err = MinuteOfHour::new(60).unwrap_err();
        assert!(matches!(err, WallclockError::InvalidArgument(ref msg) if msg.contains("60")));
    }

    #[test]
    fn test_predicates_strict() {
        let nine = HourOfDay::new(9).unwrap();
        let ten = HourOfDay::new(10).unwrap();
        assert!(ten.is_after(nine));
        assert!(nine.is_before(ten));
        assert!(!nine.is_after(nine));
        assert!(!nine.is_before(nine));

        let five = MinuteOfHour::new(5).unwrap();
        let six = MinuteOfHour::new(6).unwrap();
        assert!(six.is_after(five));
        assert!(five.is_before(six));
        assert!(!five.is_after(five));
    }

    #[test]
    fn test_zero_constants() {
        assert_eq!(HourOfDay::MIDNIGHT, HourOfDay::new(0).unwrap());
        assert_eq!(MinuteOfHour::ON_THE_HOUR, MinuteOfHour::new(0).unwrap());
    }

    #[test]
    fn test_display_unpadded() {
        assert_eq!(HourOfDay::new(7).unwrap().to_string(), "7");
        assert_eq!(MinuteOfHour::new(5).unwrap().to_string(), "5");
    }

    // ---- serde ----

    #[test]
    fn test_serde_as_integer() {
        let hour = HourOfDay::new(18).unwrap();
        assert_eq!(serde_json::to_string(&hour).unwrap(), "18");
        let parsed: HourOfDay = serde_json::from_str("18").unwrap();
        assert_eq!(parsed, hour);
    }

    #[test]
    fn test_serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<HourOfDay>("24").is_err());
        assert!(serde_json::from_str::<MinuteOfHour>("60").is_err());
        assert!(serde_json::from_str::<MinuteOfHour>("-3").is_err());
    }
}
