//! `log` command implementation.

use anyhow::{Context, Result};

use contracts::{Channel, ChannelSet, Destination, Flag};
use dispatcher::Dispatcher;

use crate::cli::LogArgs;
use crate::commands::build_dispatcher;

/// Execute the `log` command
pub fn run_log(args: &LogArgs) -> Result<()> {
    let dispatcher = build_dispatcher(&args.config)?;
    let destination = resolve_destination(&dispatcher, args)?;

    dispatcher
        .dispatch_at(&args.message, destination, contracts::call_site!())
        .context("Failed to write log record")?;

    Ok(())
}

/// Explicit channels win over `--profile`; neither means the default profile
fn resolve_destination(dispatcher: &Dispatcher, args: &LogArgs) -> Result<Destination> {
    let mut destination = if !args.channel.is_empty() {
        Destination::from(
            args.channel
                .iter()
                .copied()
                .map(Channel::from)
                .collect::<ChannelSet>(),
        )
    } else if let Some(name) = &args.profile {
        dispatcher.profile(name)?.destination()
    } else {
        dispatcher.default_destination()
    };

    if args.overwrite {
        destination.flags.insert(Flag::ForceOverwrite);
    }

    Ok(destination)
}
