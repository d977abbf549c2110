//! # Resolve and Localize Subcommands
//!
//! Cross between wall-clock readings and absolute instants using the zone
//! given by the global `--utc-offset-minutes` flag.
//!
//! - `wallclock resolve --hour --minute --year --month --day` — prints the
//!   UTC instant as `YYYY-MM-DDTHH:MM:SSZ`.
//! - `wallclock localize --epoch-secs <s>` — prints the local calendar
//!   minute of a Unix instant.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use wallclock_core::{CalendarDate, CalendarMinute, TimePoint, Timezone};

use crate::output::emit;
use crate::{Settings, TimeArgs};

/// Arguments for `wallclock resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub time: TimeArgs,

    /// Calendar year.
    #[arg(long, allow_negative_numbers = true)]
    pub year: i32,

    /// Month of the year, 1-12.
    #[arg(long)]
    pub month: u32,

    /// Day of the month, 1-31.
    #[arg(long)]
    pub day: u32,
}

/// Arguments for `wallclock localize`.
#[derive(Args, Debug)]
pub struct LocalizeArgs {
    /// Seconds since the Unix epoch.
    #[arg(long, allow_negative_numbers = true)]
    pub epoch_secs: i64,
}

#[derive(Serialize)]
struct ResolveReport {
    local: CalendarMinute,
    zone: Timezone,
    time_point: TimePoint,
}

#[derive(Serialize)]
struct LocalizeReport {
    time_point: TimePoint,
    zone: Timezone,
    local: CalendarMinute,
}

/// Execute `wallclock resolve`.
pub fn run_resolve(args: &ResolveArgs, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let zone = settings.zone()?;
    let time = args.time.to_time_of_day()?;
    let date = CalendarDate::from_ymd(args.year, args.month, args.day)
        .context("invalid --year/--month/--day")?;

    let time_point = time
        .as_time_point_given(date, zone)
        .with_context(|| format!("cannot resolve {time} on {date} at {zone}"))?;
    tracing::info!(%date, %time, %zone, %time_point, "resolved local minute");

    let report = ResolveReport {
        local: time.on(date),
        zone,
        time_point,
    };
    emit(out, settings, &time_point.to_iso8601(), &report)
}

/// Execute `wallclock localize`.
pub fn run_localize(args: &LocalizeArgs, settings: &Settings, out: &mut dyn Write) -> Result<()> {
    let zone = settings.zone()?;
    let time_point = TimePoint::from_epoch_secs(args.epoch_secs)
        .context("invalid --epoch-secs")?;
    let local = time_point
        .in_zone(zone)
        .with_context(|| format!("cannot localize {time_point} at {zone}"))?;
    tracing::info!(%time_point, %zone, %local, "localized instant");

    let report = LocalizeReport {
        time_point,
        zone,
        local,
    };
    emit(out, settings, &local.to_string(), &report)
}
