//! # Timezones — Fixed UTC Offsets
//!
//! A `Timezone` is an explicit, fixed offset from UTC. There is no timezone
//! database behind it: no zone names, no daylight-saving rules, no
//! historical offset changes. Callers that need those resolve the offset
//! themselves and pass it in.
//!
//! Because the offset is fixed, every local minute maps to exactly one
//! instant; there are no gaps or folds to disambiguate.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::WallclockError;

/// A fixed offset from UTC, strictly within ±24 hours.
///
/// Serializes as the offset in seconds east of UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Timezone(FixedOffset);

impl Timezone {
    /// Offsets must be strictly smaller than one day in magnitude.
    pub const MAX_OFFSET_SECONDS: i32 = 86_399;

    /// Coordinated Universal Time.
    pub fn utc() -> Self {
        Self(Utc.fix())
    }

    /// Construct a timezone `seconds` east of UTC (negative for west).
    pub fn from_offset_seconds(seconds: i32) -> Result<Self, WallclockError> {
        FixedOffset::east_opt(seconds).map(Self).ok_or_else(|| {
            WallclockError::out_of_range(
                "UTC offset seconds",
                seconds.into(),
                (-Self::MAX_OFFSET_SECONDS).into(),
                Self::MAX_OFFSET_SECONDS.into(),
            )
        })
    }

    /// Construct a timezone `minutes` east of UTC (negative for west).
    pub fn from_offset_minutes(minutes: i32) -> Result<Self, WallclockError> {
        let seconds = minutes.checked_mul(60).ok_or_else(|| {
            WallclockError::InvalidArgument(format!(
                "UTC offset of {minutes} minutes overflows"
            ))
        })?;
        Self::from_offset_seconds(seconds)
    }

    /// Seconds east of UTC.
    pub fn offset_seconds(&self) -> i32 {
        self.0.local_minus_utc()
    }

    /// Access the inner `FixedOffset`.
    pub fn as_fixed_offset(&self) -> &FixedOffset {
        &self.0
    }
}

impl TryFrom<i32> for Timezone {
    type Error = WallclockError;

    fn try_from(seconds: i32) -> Result<Self, Self::Error> {
        Self::from_offset_seconds(seconds)
    }
}

impl From<Timezone> for i32 {
    fn from(zone: Timezone) -> Self {
        zone.offset_seconds()
    }
}

/// Renders as `+HH:MM`, or `+HH:MM:SS` when the offset has a seconds part.
impl std::fmt::Display for Timezone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.offset_seconds();
        let sign = if total < 0 { '-' } else { '+' };
        let abs = total.unsigned_abs();
        let (hours, minutes, seconds) = (abs / 3600, (abs / 60) % 60, abs % 60);
        if seconds == 0 {
            write!(f, "{sign}{hours:02}:{minutes:02}")
        } else {
            write!(f, "{sign}{hours:02}:{minutes:02}:{seconds:02}")
        }
    }
}
