//! Output helpers shared by subcommands.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::Settings;

/// Write `text` as a line, or `value` as pretty JSON when `--json` is set.
pub fn emit<T: Serialize>(
    out: &mut dyn Write,
    settings: &Settings,
    text: &str,
    value: &T,
) -> Result<()> {
    if settings.json {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{text}")?;
    }
    Ok(())
}
