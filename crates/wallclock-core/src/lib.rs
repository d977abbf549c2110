//! # wallclock-core — Timezone-Free Calendar Values
//!
//! Value types for wall-clock readings that are not tied to an instant:
//! an hour, a minute, a time of day, a calendar date, and a date paired with
//! a time of day. Absolute instants only appear when a caller supplies an
//! explicit [`Timezone`].
//!
//! ```text
//! HourOfDay + MinuteOfHour ──► TimeOfDay
//! TimeOfDay + CalendarDate ──► CalendarMinute      (TimeOfDay::on)
//! CalendarMinute + Timezone ─► TimePoint           (CalendarMinute::as_time_point)
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Validated newtypes.** Range checks happen once, in the constructor of
//!    the smallest type that owns the range. Composite types never re-check.
//!
//! 2. **Immutable `Copy` values.** Equality, hashing and ordering derive from
//!    the fields. Accessors return copies, never mutable handles.
//!
//! 3. **Linear time of day.** `23:59` is after `0:0`; there is no midnight
//!    wraparound.
//!
//! 4. **Fixed offsets only.** A [`Timezone`] is a fixed UTC offset. There is
//!    no timezone database.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, `Copy` and implement
//!   `Serialize`/`Deserialize`, validating on the way in.

pub mod calendar_minute;
pub mod clock;
pub mod date;
pub mod error;
pub mod temporal;
pub mod time_of_day;
pub mod zone;

// Re-export primary types for ergonomic imports.
pub use calendar_minute::CalendarMinute;
pub use clock::{HourOfDay, MinuteOfHour};
pub use date::CalendarDate;
pub use error::WallclockError;
pub use temporal::TimePoint;
pub use time_of_day::TimeOfDay;
pub use zone::Timezone;
