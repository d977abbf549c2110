//! # wallclock-cli — Command-Line Front-End
//!
//! Provides the `wallclock` binary. Every subcommand takes raw integers and
//! builds values through the validating constructors of `wallclock-core`;
//! nothing is parsed out of free-form text.
//!
//! ## Subcommands
//!
//! - `wallclock show` — Render a time of day.
//! - `wallclock compare` — Order two times of day.
//! - `wallclock resolve` — Resolve a time of day on a date to a UTC instant.
//! - `wallclock localize` — Read a Unix instant as a local calendar minute.
//!
//! ```bash
//! wallclock show --hour 9 --minute 30
//! wallclock compare --hour 23 --minute 59 --other-hour 0 --other-minute 0
//! wallclock --utc-offset-minutes 330 resolve --hour 9 --minute 30 --year 2026 --month 1 --day 15
//! ```

pub mod clock;
pub mod output;
pub mod resolve;

use anyhow::{Context, Result};
use clap::Args;

use wallclock_core::{TimeOfDay, Timezone};

/// Settings shared by every subcommand, taken from global flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Settings {
    /// Emit JSON instead of plain text.
    pub json: bool,
    /// Default UTC offset, in minutes east, for commands that need a zone.
    pub utc_offset_minutes: i32,
}

impl Settings {
    /// The configured zone.
    pub fn zone(&self) -> Result<Timezone> {
        Timezone::from_offset_minutes(self.utc_offset_minutes)
            .context("invalid --utc-offset-minutes")
    }
}

/// An hour and minute given as separate integer flags.
#[derive(Args, Debug, Clone, Copy)]
pub struct TimeArgs {
    /// Hour of the day, 0-23.
    #[arg(long, allow_negative_numbers = true)]
    pub hour: i32,

    /// Minute of the hour, 0-59.
    #[arg(long, allow_negative_numbers = true)]
    pub minute: i32,
}

impl TimeArgs {
    /// Build the time of day, reporting which flag pair was rejected.
    pub fn to_time_of_day(self) -> Result<TimeOfDay> {
        TimeOfDay::from_hm(self.hour, self.minute)
            .with_context(|| format!("invalid time --hour {} --minute {}", self.hour, self.minute))
    }
}
