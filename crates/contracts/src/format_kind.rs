//! FormatKind - record layouts understood by the formatter

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::ContractError;

/// Layout used to render a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Timestamp, call site, function and message
    #[default]
    Error,
}

impl FormatKind {
    /// Numeric code of this kind
    pub const fn code(self) -> u32 {
        match self {
            FormatKind::Error => 1,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            FormatKind::Error => "error",
        }
    }
}

impl TryFrom<u32> for FormatKind {
    type Error = ContractError;

    fn try_from(code: u32) -> Result<Self, ContractError> {
        match code {
            1 => Ok(FormatKind::Error),
            other => Err(ContractError::invalid_format_kind(other.to_string())),
        }
    }
}

impl FromStr for FormatKind {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, ContractError> {
        match s.to_lowercase().as_str() {
            "error" => Ok(FormatKind::Error),
            _ => Err(ContractError::invalid_format_kind(s)),
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
