//! Dispatcher - formats a message once and routes it to the selected channels

use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, instrument, warn};

use contracts::{
    CallSite, Channel, ChannelProfile, ContractError, Destination, FormatKind, FormattedRecord,
    LoggerBlueprint, RecordSink,
};

use crate::clock::{Clock, SystemClock};
use crate::error::{ChannelFailure, DispatchError};
use crate::format;
use crate::metrics::{DispatchMetrics, MetricsSnapshot};
use crate::sinks::{ConsoleSink, FileSink};

/// Log target used when none is configured
pub const DEFAULT_TARGET_PATH: &str = "log.txt";

/// Dispatcher configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// File written by the `LogFile` channel
    pub target_path: PathBuf,
    /// Serialize concurrent writes to the same target file
    pub serialize_file_writes: bool,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            target_path: PathBuf::from(DEFAULT_TARGET_PATH),
            serialize_file_writes: true,
        }
    }
}

impl From<&LoggerBlueprint> for DispatcherConfig {
    fn from(blueprint: &LoggerBlueprint) -> Self {
        Self {
            target_path: PathBuf::from(&blueprint.target_path),
            serialize_file_writes: blueprint.serialize_file_writes,
        }
    }
}

/// Builder for creating a Dispatcher
pub struct DispatcherBuilder {
    config: DispatcherConfig,
    console_out: Arc<dyn RecordSink>,
    console_err: Arc<dyn RecordSink>,
    clock: Arc<dyn Clock>,
    profiles: Vec<ChannelProfile>,
    default_profile: Option<String>,
}

impl DispatcherBuilder {
    /// Create a new DispatcherBuilder with console sinks on the std streams
    pub fn new(config: DispatcherConfig) -> Self {
        Self {
            config,
            console_out: Arc::new(ConsoleSink::stdout()),
            console_err: Arc::new(ConsoleSink::stderr()),
            clock: Arc::new(SystemClock),
            profiles: Vec::new(),
            default_profile: None,
        }
    }

    /// Replace the sink behind `ConsoleOut`
    pub fn console_out(mut self, sink: impl RecordSink + 'static) -> Self {
        self.console_out = Arc::new(sink);
        self
    }

    /// Replace the sink behind `ConsoleErr`
    pub fn console_err(mut self, sink: impl RecordSink + 'static) -> Self {
        self.console_err = Arc::new(sink);
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Register a custom profile next to the built-ins
    pub fn profile(mut self, profile: ChannelProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    /// Profile used by [`Dispatcher::log`]; the standard `log` profile if unset
    pub fn default_profile(mut self, name: impl Into<String>) -> Self {
        self.default_profile = Some(name.into());
        self
    }

    /// Build the dispatcher
    ///
    /// # Errors
    /// - A custom profile reuses a registered name
    /// - The default profile is not registered
    #[instrument(
        name = "dispatcher_builder_build",
        skip(self),
        fields(
            target = %self.config.target_path.display(),
            custom_profiles = self.profiles.len()
        )
    )]
    pub fn build(self) -> Result<Dispatcher, ContractError> {
        let profiles = Self::register_profiles(self.profiles)?;

        let default_profile = match &self.default_profile {
            Some(name) => profiles
                .get(name)
                .cloned()
                .ok_or_else(|| ContractError::unknown_profile(name))?,
            None => ChannelProfile::LOG,
        };

        debug!(profiles = profiles.len(), "Dispatcher built");

        Ok(Dispatcher::assemble(
            self.config,
            self.console_out,
            self.console_err,
            self.clock,
            profiles,
            default_profile,
        ))
    }

    fn register_profiles(
        custom: Vec<ChannelProfile>,
    ) -> Result<HashMap<String, ChannelProfile>, ContractError> {
        let mut profiles = builtin_profiles();
        for profile in custom {
            let name = profile.name().to_string();
            if profiles.contains_key(&name) {
                return Err(ContractError::config_validation(
                    format!("profiles[name={name}]"),
                    "duplicate profile name",
                ));
            }
            profiles.insert(name, profile);
        }
        Ok(profiles)
    }
}

fn builtin_profiles() -> HashMap<String, ChannelProfile> {
    ChannelProfile::builtins()
        .into_iter()
        .map(|p| (p.name().to_string(), p))
        .collect()
}

/// Formats each message once and writes it to every selected channel.
///
/// Cheap to clone: sinks, locks, metrics and the profile registry are shared.
/// Writes are synchronous and happen on the calling thread.
#[derive(Clone)]
pub struct Dispatcher {
    config: DispatcherConfig,
    console_out: Arc<dyn RecordSink>,
    console_err: Arc<dyn RecordSink>,
    file: FileSink,
    clock: Arc<dyn Clock>,
    profiles: Arc<HashMap<String, ChannelProfile>>,
    default_profile: ChannelProfile,
    metrics: Arc<DispatchMetrics>,
}

impl Dispatcher {
    /// Create a dispatcher on the std streams with the built-in profiles
    pub fn new(config: DispatcherConfig) -> Self {
        Self::assemble(
            config,
            Arc::new(ConsoleSink::stdout()),
            Arc::new(ConsoleSink::stderr()),
            Arc::new(SystemClock),
            builtin_profiles(),
            ChannelProfile::LOG,
        )
    }

    pub fn builder(config: DispatcherConfig) -> DispatcherBuilder {
        DispatcherBuilder::new(config)
    }

    /// Create a dispatcher from a loaded configuration
    #[instrument(
        name = "dispatcher_from_blueprint",
        skip(blueprint),
        fields(profiles = blueprint.profiles.len())
    )]
    pub fn from_blueprint(blueprint: &LoggerBlueprint) -> Result<Self, ContractError> {
        blueprint
            .profiles
            .iter()
            .fold(
                DispatcherBuilder::new(DispatcherConfig::from(blueprint)),
                |builder, profile| builder.profile(profile.to_profile()),
            )
            .default_profile(&blueprint.default_profile)
            .build()
    }

    fn assemble(
        config: DispatcherConfig,
        console_out: Arc<dyn RecordSink>,
        console_err: Arc<dyn RecordSink>,
        clock: Arc<dyn Clock>,
        profiles: HashMap<String, ChannelProfile>,
        default_profile: ChannelProfile,
    ) -> Self {
        let file = if config.serialize_file_writes {
            FileSink::serialized(&config.target_path)
        } else {
            FileSink::new(&config.target_path)
        };

        Self {
            config,
            console_out,
            console_err,
            file,
            clock,
            profiles: Arc::new(profiles),
            default_profile,
            metrics: Arc::new(DispatchMetrics::new()),
        }
    }

    pub fn config(&self) -> &DispatcherConfig {
        &self.config
    }

    /// File currently written by the `LogFile` channel
    pub fn target_path(&self) -> &Path {
        self.file.path()
    }

    /// A dispatcher writing its `LogFile` channel to `path`.
    ///
    /// Sinks, locks, profiles and metrics stay shared with `self`.
    pub fn retarget(&self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut next = self.clone();
        next.file = self.file.retarget(&path);
        next.config.target_path = path;
        next
    }

    /// Look up a registered profile
    pub fn profile(&self, name: &str) -> Result<&ChannelProfile, ContractError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ContractError::unknown_profile(name))
    }

    /// Registered profiles sorted by name
    pub fn profiles(&self) -> Vec<&ChannelProfile> {
        let mut profiles: Vec<_> = self.profiles.values().collect();
        profiles.sort_by(|a, b| a.name().cmp(b.name()));
        profiles
    }

    /// Profile used when no destination is given
    pub fn default_profile(&self) -> &ChannelProfile {
        &self.default_profile
    }

    pub fn default_destination(&self) -> Destination {
        self.default_profile.destination()
    }

    /// Dispatch to the default destination
    ///
    /// `#[track_caller]` yields file, line and column only; the function is
    /// rendered as [`UNKNOWN_FUNCTION`](contracts::UNKNOWN_FUNCTION). Use
    /// [`clog_to!`](crate::clog_to) to record the enclosing function too.
    #[track_caller]
    pub fn log(&self, message: impl AsRef<str>) -> Result<(), DispatchError> {
        self.dispatch_at(message, self.default_destination(), CallSite::caller())
    }

    /// Dispatch to `destination`, stamped with the caller's location
    ///
    /// Like [`Dispatcher::log`], the function name is not captured; use
    /// [`clog_to!`](crate::clog_to) or [`Dispatcher::dispatch_at`] with
    /// [`call_site!`](contracts::call_site) for the full call site.
    #[track_caller]
    pub fn dispatch(
        &self,
        message: impl AsRef<str>,
        destination: impl Into<Destination>,
    ) -> Result<(), DispatchError> {
        self.dispatch_at(message, destination, CallSite::caller())
    }

    /// Format `message` once and write it to every channel of `destination`.
    ///
    /// Every selected channel is attempted; failed ones are collected into
    /// the returned [`DispatchError`]. An empty channel set does nothing.
    pub fn dispatch_at(
        &self,
        message: impl AsRef<str>,
        destination: impl Into<Destination>,
        call_site: CallSite,
    ) -> Result<(), DispatchError> {
        let destination = destination.into();
        if destination.channels.is_empty() {
            return Ok(());
        }

        let record = self.format_at(message.as_ref(), FormatKind::Error, &call_site);
        self.metrics.inc_records();

        debug!(
            channels = %destination.channels,
            flags = %destination.flags,
            call_site = %call_site,
            bytes = record.len(),
            "Dispatching record"
        );

        let failures: Vec<ChannelFailure> = destination
            .channels
            .iter()
            .filter_map(|channel| self.write_channel(channel, &record, destination))
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::new(destination.channels.len(), failures))
        }
    }

    fn write_channel(
        &self,
        channel: Channel,
        record: &FormattedRecord,
        destination: Destination,
    ) -> Option<ChannelFailure> {
        let sink = self.sink_for(channel);
        let metrics = self.metrics.channel(channel);

        match sink.write(record, destination.flags) {
            Ok(()) => {
                metrics.record_write(record.len());
                None
            }
            Err(source) => {
                metrics.inc_failure_count();
                warn!(
                    channel = %channel,
                    sink = sink.name(),
                    error = %source,
                    "Channel write failed"
                );
                Some(ChannelFailure {
                    channel,
                    sink: sink.name().to_string(),
                    source,
                })
            }
        }
    }

    fn sink_for(&self, channel: Channel) -> &dyn RecordSink {
        match channel {
            Channel::ConsoleOut => self.console_out.as_ref(),
            Channel::ConsoleErr => self.console_err.as_ref(),
            Channel::LogFile => &self.file,
        }
    }

    /// Render `message` without writing it, stamped with the caller's location
    #[track_caller]
    pub fn format(&self, message: impl AsRef<str>, kind: FormatKind) -> FormattedRecord {
        self.format_at(message.as_ref(), kind, &CallSite::caller())
    }

    /// Render `message` without writing it
    pub fn format_at(&self, message: &str, kind: FormatKind, call_site: &CallSite) -> FormattedRecord {
        format::render(kind, &self.clock.now(), call_site, message)
    }

    /// Render with a kind given by its numeric code
    ///
    /// # Errors
    /// [`ContractError::InvalidFormatKind`] for an unrecognized code.
    pub fn format_code_at(
        &self,
        message: &str,
        code: u32,
        call_site: &CallSite,
    ) -> Result<FormattedRecord, ContractError> {
        format::format_code(message, code, &self.clock.now(), call_site)
    }

    /// Get metrics for all channels
    pub fn metrics(&self) -> Vec<(Channel, MetricsSnapshot)> {
        self.metrics.snapshot()
    }

    /// Records formatted and routed so far
    pub fn records_dispatched(&self) -> u64 {
        self.metrics.records()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DispatcherConfig::default())
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("config", &self.config)
            .field("target_path", &self.file.path())
            .field("console_out", &self.console_out.name())
            .field("console_err", &self.console_err.name())
            .field("profiles", &self.profiles.len())
            .field("default_profile", &self.default_profile.name())
            .finish()
    }
}
