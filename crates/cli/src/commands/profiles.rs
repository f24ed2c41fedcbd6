//! `profiles` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;

use contracts::{Channel, ChannelProfile, Flag};
use dispatcher::Dispatcher;

use crate::cli::ProfilesArgs;
use crate::commands::build_dispatcher;

/// Profile info for JSON output
#[derive(Serialize)]
struct ProfileInfo {
    name: String,
    channels: Vec<Channel>,
    flags: Vec<Flag>,
    default: bool,
}

/// Execute the `profiles` command
pub fn run_profiles(args: &ProfilesArgs) -> Result<()> {
    let dispatcher = build_dispatcher(&args.config)?;
    let infos = collect_profile_infos(&dispatcher);

    if args.json {
        let json =
            serde_json::to_string_pretty(&infos).context("Failed to serialize profiles")?;
        println!("{}", json);
    } else {
        println!("Log target: {}", dispatcher.target_path().display());
        for info in &infos {
            print_profile_info(info);
        }
    }

    Ok(())
}

/// Registered profiles, the default one marked by name
fn collect_profile_infos(dispatcher: &Dispatcher) -> Vec<ProfileInfo> {
    let default = dispatcher.default_profile().name();
    dispatcher
        .profiles()
        .into_iter()
        .map(|profile| build_profile_info(profile, profile.name() == default))
        .collect()
}

fn build_profile_info(profile: &ChannelProfile, default: bool) -> ProfileInfo {
    ProfileInfo {
        name: profile.name().to_string(),
        channels: profile.channels().iter().collect(),
        flags: profile.flags().iter().collect(),
        default,
    }
}

fn print_profile_info(info: &ProfileInfo) {
    let marker = if info.default { "*" } else { " " };
    let channels: Vec<_> = info.channels.iter().map(|c| c.as_str()).collect();
    let flags: Vec<_> = info.flags.iter().map(|f| f.as_str()).collect();
    println!(
        "{} {:<16} channels=[{}] flags=[{}]",
        marker,
        info.name,
        channels.join(", "),
        flags.join(", ")
    );
}
