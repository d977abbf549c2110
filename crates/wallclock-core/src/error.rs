//! # Error Types
//!
//! Every fallible operation in wallclock fails for the same reason: a caller
//! handed in a value outside the domain of the type being built. There is
//! one error kind, raised synchronously at construction or at the point of
//! use. Values are never clamped or wrapped into range.

use thiserror::Error;

/// Top-level error type for wallclock.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WallclockError {
    /// An argument was outside the valid range of the type being constructed,
    /// or a derived value could not be represented.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl WallclockError {
    /// Shorthand for an out-of-range integer argument.
    pub(crate) fn out_of_range(what: &str, value: i64, min: i64, max: i64) -> Self {
        Self::InvalidArgument(format!(
            "{what} must be in [{min}, {max}], got {value}"
        ))
    }
}
