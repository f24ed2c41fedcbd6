//! Layered error definitions
//!
//! Categorized by source: config / profile / format / sink

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // ===== Profile Errors =====
    /// No profile registered under this name
    #[error("unknown channel profile: {name}")]
    UnknownProfile { name: String },

    // ===== Format Errors =====
    /// Format kind not recognized by the formatter
    #[error("invalid format kind: {kind}")]
    InvalidFormatKind { kind: String },

    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create unknown profile error
    pub fn unknown_profile(name: impl Into<String>) -> Self {
        Self::UnknownProfile { name: name.into() }
    }

    /// Create invalid format kind error
    pub fn invalid_format_kind(kind: impl Into<String>) -> Self {
        Self::InvalidFormatKind { kind: kind.into() }
    }
}
