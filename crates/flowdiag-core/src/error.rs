//! Core error types for flowdiag-core.
//!
//! This module defines the error hierarchy using thiserror. The diagnostic
//! flow itself has a single user-correctable failure (a missing lead field);
//! everything else here covers configuration I/O and misuse of the engine API.

use std::path::PathBuf;
use thiserror::Error;

use crate::diagnostic::DiagnosticState;

/// Core error type for flowdiag-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Diagnostic flow errors
    #[error("Diagnostic error: {0}")]
    Diagnostic(#[from] DiagnosticError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failure handing the booking link to the system opener
    #[error("Failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Config file exists but is not valid TOML for [`crate::Config`]
    #[error("Failed to parse configuration at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration tree
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Could not locate or create the data directory
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Lead field names, used in [`DiagnosticError::MissingField`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Business,
}

impl std::fmt::Display for LeadField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            LeadField::Name => "name",
            LeadField::Email => "email",
            LeadField::Business => "business",
        };
        f.write_str(name)
    }
}

/// Errors raised by the diagnostic engine and its inputs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticError {
    /// A required lead field was empty
    #[error("Missing required field: {0}")]
    MissingField(LeadField),

    /// Email failed the optional shape check
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// Answer outside the 1-5 scale
    #[error("Rating {0} is outside the 1-5 scale")]
    RatingOutOfRange(i64),

    /// No question with this id in the bank
    #[error("Unknown question id: {0}")]
    UnknownQuestion(u32),

    /// Operation not allowed in the current state
    #[error("Cannot {action} while in {state} state")]
    InvalidTransition {
        action: &'static str,
        state: DiagnosticState,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message_names_field() {
        let err = DiagnosticError::MissingField(LeadField::Email);
        assert_eq!(err.to_string(), "Missing required field: email");
    }

    #[test]
    fn invalid_transition_message_names_state() {
        let err = DiagnosticError::InvalidTransition {
            action: "record an answer",
            state: DiagnosticState::Lead,
        };
        assert_eq!(err.to_string(), "Cannot record an answer while in lead state");
    }

    #[test]
    fn toml_parse_error_is_kept_as_source() {
        let source = toml::from_str::<toml::Value>("[lead\n").unwrap_err();
        let err = ConfigError::Parse {
            path: PathBuf::from("/tmp/config.toml"),
            source,
        };
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().starts_with("Failed to parse configuration at /tmp/config.toml"));

        let core: CoreError = err.into();
        assert!(matches!(core, CoreError::Config(ConfigError::Parse { .. })));
    }

    #[test]
    fn diagnostic_error_wraps_into_core_error() {
        let core: CoreError = DiagnosticError::UnknownQuestion(99).into();
        assert!(matches!(core, CoreError::Diagnostic(DiagnosticError::UnknownQuestion(99))));
        assert_eq!(core.to_string(), "Diagnostic error: Unknown question id: 99");
    }
}
