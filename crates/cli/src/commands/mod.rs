//! Command implementations.

mod format;
mod log;
mod profiles;
mod validate;

pub use format::run_format;
pub use log::run_log;
pub use profiles::run_profiles;
pub use validate::run_validate;

use anyhow::{Context, Result};
use tracing::info;

use config_loader::{ConfigLoader, LoggerBlueprint};
use dispatcher::Dispatcher;

use crate::cli::ConfigArgs;

/// Build the dispatcher described by `--config`, retargeted by `--target`
pub(crate) fn build_dispatcher(args: &ConfigArgs) -> Result<Dispatcher> {
    let blueprint = match &args.config {
        Some(path) => ConfigLoader::load_from_path(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => LoggerBlueprint::default(),
    };

    let dispatcher =
        Dispatcher::from_blueprint(&blueprint).context("Failed to build dispatcher")?;

    let dispatcher = match &args.target {
        Some(target) => dispatcher.retarget(target),
        None => dispatcher,
    };

    info!(
        target = %dispatcher.target_path().display(),
        default = %dispatcher.default_destination().channels,
        "Dispatcher ready"
    );

    Ok(dispatcher)
}
