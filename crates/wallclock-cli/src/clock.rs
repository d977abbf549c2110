//! # Show and Compare Subcommands
//!
//! - `wallclock show --hour <h> --minute <m>` — diagnostic rendering.
//! - `wallclock compare ... --other-hour <h> --other-minute <m>` — prints
//!   `before`, `after` or `equal`. Times of day are compared linearly; there
//!   is no wraparound at midnight.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use wallclock_core::TimeOfDay;

use crate::output::emit;
use crate::{Settings, TimeArgs};

/// Arguments for `wallclock show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(flatten)]
    pub time: TimeArgs,
}

/// Arguments for `wallclock compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    #[command(flatten)]
    pub time: TimeArgs,

    /// Hour of the time to compare against, 0-23.
    #[arg(long, allow_negative_numbers = true)]
    pub other_hour: i32,

    /// Minute of the time to compare against, 0-59.
    #[arg(long, allow_negative_numbers = true)]
    pub other_minute: i32,
}

/// How the first time of day relates to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Before,
    Equal,
    After,
}

impl Relation {
    /// Classify `first` against `second`.
    pub fn between(first: &TimeOfDay, second: &TimeOfDay) -> Self {
        if first.is_before(second) {
            Self::Before
        } else if first.is_after(second) {
            Self::After
        } else {
            Self::Equal
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Before => "before",
            Self::Equal => "equal",
            Self::After => "after",
        };
        f.write_str(s)
    }
}

#[derive(Serialize)]
struct ShowReport {
    time: TimeOfDay,
    display: String,
}

#[derive(Serialize)]
struct CompareReport {
    first: TimeOfDay,
    second: TimeOfDay,
    relation: Relation,
}

/// Execute `wallclock show`.
pub fn run_show(args: &ShowArgs, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let time = args.time.to_time_of_day()?;
    tracing::debug!(%time, "rendering time of day");

    let report = ShowReport {
        time,
        display: time.to_string(),
    };
    emit(out, settings, &report.display, &report)
}

/// Execute `wallclock compare`.
pub fn run_compare(args: &CompareArgs, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let first = args.time.to_time_of_day()?;
    let second = TimeOfDay::from_hm(args.other_hour, args.other_minute).with_context(|| {
        format!(
            "invalid time --other-hour {} --other-minute {}",
            args.other_hour, args.other_minute
        )
    })?;

    let relation = Relation::between(&first, &second);
    tracing::info!(%first, %second, %relation, "compared times of day");

    let report = CompareReport {
        first,
        second,
        relation,
    };
    emit(out, settings, &relation.to_string(), &report)
}
