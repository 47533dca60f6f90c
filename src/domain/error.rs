//! Domain error types

use thiserror::Error;

use crate::domain::audio::ACCEPTED_EXTENSIONS;
use crate::domain::credential::CREDENTIAL_PREFIX;

/// Error when a credential candidate fails validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("API key must not be empty")]
    Empty,

    #[error("API key must start with \"{}\"", CREDENTIAL_PREFIX)]
    MissingPrefix,
}

/// Error when an audio file is not one of the accepted containers
#[derive(Debug, Clone, Error)]
#[error("Unsupported audio format: \"{input}\". Accepted formats: {}", ACCEPTED_EXTENSIONS.join(", "))]
pub struct UnsupportedFormatError {
    pub input: String,
}

/// Error when an invalid briefing type is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid briefing type: \"{input}\". Valid types are: meeting-minutes, daily-report, study-notes, news-summary")]
pub struct InvalidBriefingTypeError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
