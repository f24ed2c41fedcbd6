//! Channel / Flag vocabularies and their set types
//!
//! Both vocabularies are closed enums. Sets are explicit membership tables
//! indexed by an exhaustive `index()` match, so adding a variant is a
//! compile-time-checked change everywhere the set is consumed.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Output destination of a formatted record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    /// Standard output
    ConsoleOut,
    /// Standard error
    ConsoleErr,
    /// The dispatcher's log target file
    LogFile,
}

impl Channel {
    /// Number of channel variants
    pub const COUNT: usize = 3;

    /// All channels in declaration order
    pub const ALL: [Channel; Channel::COUNT] =
        [Channel::ConsoleOut, Channel::ConsoleErr, Channel::LogFile];

    /// Position of this channel in a membership table
    pub const fn index(self) -> usize {
        match self {
            Channel::ConsoleOut => 0,
            Channel::ConsoleErr => 1,
            Channel::LogFile => 2,
        }
    }

    /// Stable name used in config files and diagnostics
    pub const fn as_str(self) -> &'static str {
        match self {
            Channel::ConsoleOut => "console_out",
            Channel::ConsoleErr => "console_err",
            Channel::LogFile => "log_file",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Modifier affecting how a channel writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    /// Truncate the log file instead of appending (`LogFile` only)
    ForceOverwrite,
}

impl Flag {
    /// Number of flag variants
    pub const COUNT: usize = 1;

    /// All flags in declaration order
    pub const ALL: [Flag; Flag::COUNT] = [Flag::ForceOverwrite];

    /// Position of this flag in a membership table
    pub const fn index(self) -> usize {
        match self {
            Flag::ForceOverwrite => 0,
        }
    }

    /// Stable name used in config files and diagnostics
    pub const fn as_str(self) -> &'static str {
        match self {
            Flag::ForceOverwrite => "force_overwrite",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Define a set type over a closed enum vocabulary
///
/// The member type must provide `COUNT`, `ALL` and a `const fn index()`.
///
/// # Usage
/// ```ignore
/// define_member_set!(
///     /// Set of channels
///     ChannelSet,
///     Channel
/// );
/// ```
macro_rules! define_member_set {
    (
        $(#[$meta:meta])*
        $set_name:ident,
        $member:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub struct $set_name {
            members: [bool; $member::COUNT],
        }

        impl $set_name {
            /// The empty set
            pub const EMPTY: Self = Self {
                members: [false; $member::COUNT],
            };

            /// Build a set from a slice; duplicates are ignored
            pub const fn of(members: &[$member]) -> Self {
                let mut set = Self::EMPTY;
                let mut i = 0;
                while i < members.len() {
                    set.members[members[i].index()] = true;
                    i += 1;
                }
                set
            }

            /// Set containing every member of the vocabulary
            pub const fn all() -> Self {
                Self::of(&$member::ALL)
            }

            pub const fn contains(&self, member: $member) -> bool {
                self.members[member.index()]
            }

            /// Insert a member, returning true if it was not present
            pub fn insert(&mut self, member: $member) -> bool {
                let slot = &mut self.members[member.index()];
                let added = !*slot;
                *slot = true;
                added
            }

            /// Remove a member, returning true if it was present
            pub fn remove(&mut self, member: $member) -> bool {
                let slot = &mut self.members[member.index()];
                let removed = *slot;
                *slot = false;
                removed
            }

            /// Return a copy of this set with `member` added
            pub const fn with(mut self, member: $member) -> Self {
                self.members[member.index()] = true;
                self
            }

            pub fn is_empty(&self) -> bool {
                !self.members.iter().any(|present| *present)
            }

            pub fn len(&self) -> usize {
                self.members.iter().filter(|present| **present).count()
            }

            /// Members in declaration order
            pub fn iter(&self) -> impl Iterator<Item = $member> + '_ {
                $member::ALL
                    .iter()
                    .copied()
                    .filter(move |member| self.contains(*member))
            }
        }

        impl From<$member> for $set_name {
            fn from(member: $member) -> Self {
                Self::EMPTY.with(member)
            }
        }

        impl<const N: usize> From<[$member; N]> for $set_name {
            fn from(members: [$member; N]) -> Self {
                Self::of(&members)
            }
        }

        impl FromIterator<$member> for $set_name {
            fn from_iter<I: IntoIterator<Item = $member>>(iter: I) -> Self {
                let mut set = Self::EMPTY;
                set.extend(iter);
                set
            }
        }

        impl Extend<$member> for $set_name {
            fn extend<I: IntoIterator<Item = $member>>(&mut self, iter: I) {
                for member in iter {
                    self.insert(member);
                }
            }
        }

        impl fmt::Debug for $set_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_set().entries(self.iter()).finish()
            }
        }

        impl fmt::Display for $set_name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("{")?;
                for (i, member) in self.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str("}")
            }
        }

        // Serialized as a sequence of member names
        impl Serialize for $set_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_seq(self.iter())
            }
        }

        impl<'de> Deserialize<'de> for $set_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let members = Vec::<$member>::deserialize(deserializer)?;
                Ok(members.into_iter().collect())
            }
        }
    };
}

define_member_set!(
    /// Set of output channels (order-irrelevant, duplicates ignored)
    ChannelSet,
    Channel
);

define_member_set!(
    /// Set of modifier flags
    FlagSet,
    Flag
);
