//! `format` command implementation.

use anyhow::{Context, Result};
use std::io::{self, Write};

use contracts::FormatKind;

use crate::cli::FormatArgs;
use crate::commands::build_dispatcher;

/// Execute the `format` command
pub fn run_format(args: &FormatArgs) -> Result<()> {
    let kind: FormatKind = args
        .kind
        .parse()
        .with_context(|| format!("Unsupported record layout '{}'", args.kind))?;

    let dispatcher = build_dispatcher(&args.config)?;
    let record = dispatcher.format_at(&args.message, kind, &contracts::call_site!());

    let mut out = io::stdout().lock();
    out.write_all(record.as_bytes())
        .context("Failed to print formatted record")?;
    out.flush().context("Failed to flush stdout")?;

    Ok(())
}
