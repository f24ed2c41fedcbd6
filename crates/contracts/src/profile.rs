//! Channel profiles and dispatch destinations

use std::borrow::Cow;
use std::fmt;

use crate::{Channel, ChannelSet, Flag, FlagSet};

/// Named immutable pairing of a channel set and a flag set
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelProfile {
    name: Cow<'static, str>,
    channels: ChannelSet,
    flags: FlagSet,
}

impl ChannelProfile {
    /// Standard log profile: stdout + log file, append
    pub const LOG: Self = Self::builtin(
        "log",
        ChannelSet::of(&[Channel::ConsoleOut, Channel::LogFile]),
        FlagSet::EMPTY,
    );

    /// Standard log profile with the log file truncated on every write
    pub const LOG_OVERWRITE: Self = Self::builtin(
        "log_overwrite",
        ChannelSet::of(&[Channel::ConsoleOut, Channel::LogFile]),
        FlagSet::of(&[Flag::ForceOverwrite]),
    );

    /// Error-style profile: stderr + log file, append
    pub const ERROR: Self = Self::builtin(
        "error",
        ChannelSet::of(&[Channel::ConsoleErr, Channel::LogFile]),
        FlagSet::EMPTY,
    );

    const fn builtin(name: &'static str, channels: ChannelSet, flags: FlagSet) -> Self {
        Self {
            name: Cow::Borrowed(name),
            channels,
            flags,
        }
    }

    /// Create a custom profile
    pub fn new(name: impl Into<Cow<'static, str>>, channels: ChannelSet, flags: FlagSet) -> Self {
        Self {
            name: name.into(),
            channels,
            flags,
        }
    }

    /// The built-in profiles
    pub fn builtins() -> [ChannelProfile; 3] {
        [Self::LOG, Self::LOG_OVERWRITE, Self::ERROR]
    }

    /// Look up a built-in profile by name
    pub fn builtin_by_name(name: &str) -> Option<ChannelProfile> {
        Self::builtins().into_iter().find(|p| p.name() == name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn channels(&self) -> ChannelSet {
        self.channels
    }

    pub fn flags(&self) -> FlagSet {
        self.flags
    }

    /// The destination this profile stands for
    pub fn destination(&self) -> Destination {
        Destination::new(self.channels, self.flags)
    }
}

impl fmt::Display for ChannelProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.channels, self.flags)
    }
}

/// Where a single dispatch goes: a channel set plus the flags modifying it
///
/// Defaults to the standard [`ChannelProfile::LOG`] destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Destination {
    pub channels: ChannelSet,
    pub flags: FlagSet,
}

impl Destination {
    pub const fn new(channels: ChannelSet, flags: FlagSet) -> Self {
        Self { channels, flags }
    }

    /// Destination that selects no channel at all
    pub const fn none() -> Self {
        Self::new(ChannelSet::EMPTY, FlagSet::EMPTY)
    }
}

impl Default for Destination {
    fn default() -> Self {
        ChannelProfile::LOG.destination()
    }
}

impl From<ChannelProfile> for Destination {
    fn from(profile: ChannelProfile) -> Self {
        profile.destination()
    }
}

impl From<&ChannelProfile> for Destination {
    fn from(profile: &ChannelProfile) -> Self {
        profile.destination()
    }
}

impl From<ChannelSet> for Destination {
    fn from(channels: ChannelSet) -> Self {
        Self::new(channels, FlagSet::EMPTY)
    }
}

impl From<Channel> for Destination {
    fn from(channel: Channel) -> Self {
        Self::new(channel.into(), FlagSet::EMPTY)
    }
}

impl From<(ChannelSet, FlagSet)> for Destination {
    fn from((channels, flags): (ChannelSet, FlagSet)) -> Self {
        Self::new(channels, flags)
    }
}
