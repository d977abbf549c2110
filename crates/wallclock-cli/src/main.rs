//! # wallclock CLI entry point
//!
//! Parses command-line arguments, initializes tracing, and dispatches to
//! subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wallclock_cli::clock::{run_compare, run_show, CompareArgs, ShowArgs};
use wallclock_cli::resolve::{run_localize, run_resolve, LocalizeArgs, ResolveArgs};
use wallclock_cli::Settings;

/// wallclock — times of day, calendar dates and fixed-offset instants.
#[derive(Parser, Debug)]
#[command(name = "wallclock", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON instead of plain text.
    #[arg(long, global = true)]
    json: bool,

    /// UTC offset in minutes east (negative for west) used to resolve and
    /// localize instants.
    #[arg(long, global = true, default_value_t = 0, allow_negative_numbers = true)]
    utc_offset_minutes: i32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a time of day.
    Show(ShowArgs),

    /// Compare two times of day.
    Compare(CompareArgs),

    /// Resolve a time of day on a calendar date to a UTC instant.
    Resolve(ResolveArgs),

    /// Read a Unix instant as a local calendar minute.
    Localize(LocalizeArgs),
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // RUST_LOG wins over -v when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = Settings {
        json: cli.json,
        utc_offset_minutes: cli.utc_offset_minutes,
    };
    tracing::debug!(?settings, "wallclock starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Show(args) => run_show(args, &settings, &mut out),
        Commands::Compare(args) => run_compare(args, &settings, &mut out),
        Commands::Resolve(args) => run_resolve(args, &settings, &mut out),
        Commands::Localize(args) => run_localize(args, &settings, &mut out),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parse_show() {
        let cli = Cli::try_parse_from(["wallclock", "show", "--hour", "9", "--minute", "30"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.utc_offset_minutes, 0);
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.time.hour, 9);
            assert_eq!(args.time.minute, 30);
        } else {
            panic!("expected show");
        }
    }

    #[test]
    fn cli_parse_show_missing_minute() {
        assert!(Cli::try_parse_from(["wallclock", "show", "--hour", "9"]).is_err());
    }

    #[test]
    fn cli_parse_negative_values_reach_validation() {
        let cli = Cli::try_parse_from(["wallclock", "show", "--hour", "-1", "--minute", "0"]).unwrap();
        if let Commands::Show(args) = cli.command {
            assert_eq!(args.time.hour, -1);
            assert!(args.time.to_time_of_day().is_err());
        } else {
            panic!("expected show");
        }
    }

    #[test]
    fn cli_parse_compare() {
        let cli = Cli::try_parse_from([
            "wallclock",
            "compare",
            "--hour",
            "23",
            "--minute",
            "59",
            "--other-hour",
            "0",
            "--other-minute",
            "0",
        ])
        .unwrap();
        if let Commands::Compare(args) = cli.command {
            assert_eq!(args.time.hour, 23);
            assert_eq!(args.other_hour, 0);
            assert_eq!(args.other_minute, 0);
        } else {
            panic!("expected compare");
        }
    }

    #[test]
    fn cli_parse_resolve_with_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wallclock",
            "resolve",
            "--hour",
            "9",
            "--minute",
            "30",
            "--year",
            "2026",
            "--month",
            "1",
            "--day",
            "15",
            "--utc-offset-minutes",
            "-240",
            "--json",
            "-vv",
        ])
        .unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.utc_offset_minutes, -240);
        assert!(matches!(cli.command, Commands::Resolve(_)));
    }

    #[test]
    fn cli_parse_localize() {
        let cli = Cli::try_parse_from(["wallclock", "localize", "--epoch-secs", "0"]).unwrap();
        if let Commands::Localize(args) = cli.command {
            assert_eq!(args.epoch_secs, 0);
        } else {
            panic!("expected localize");
        }
    }

    #[test]
    fn cli_parse_unknown_subcommand() {
        assert!(Cli::try_parse_from(["wallclock", "parse", "9:30"]).is_err());
    }
}
